//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("No organization selected")]
    MissingOrganization,

    #[error(transparent)]
    Repository(#[from] RepoError),

    #[error(transparent)]
    Identity(#[from] IdentityError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Identity provider errors.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Organization not found: {0}")]
    NotFound(String),

    #[error("Identity provider request failed: {0}")]
    Upstream(String),
}
