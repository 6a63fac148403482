//! # Tenantblog Infrastructure
//!
//! Concrete implementations of the ports defined in `tenantblog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL storage via SeaORM
//! - `auth` - JWT session verification
//! - `identity-http` - HTTP client for the identity provider's organization API

pub mod database;
pub mod identity;
pub mod memory;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::DatabaseConfig;
pub use identity::StaticOrganizationDirectory;
pub use memory::InMemoryBlogPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresBlogPostRepository;

#[cfg(feature = "auth")]
pub use auth::{JwtSessionVerifier, SessionKey, SessionTokenConfig};

#[cfg(feature = "identity-http")]
pub use identity::{HttpOrganizationDirectory, IdentityApiConfig};
