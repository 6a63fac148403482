//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod identity;
mod repository;
mod session;

pub use identity::OrganizationDirectory;
pub use repository::BlogPostRepository;
pub use session::{AuthError, SessionClaims, SessionVerifier};
