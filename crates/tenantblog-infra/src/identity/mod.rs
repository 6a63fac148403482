//! Organization directory implementations.

mod memory;

#[cfg(feature = "identity-http")]
mod http;

pub use memory::StaticOrganizationDirectory;

#[cfg(feature = "identity-http")]
pub use http::{HttpOrganizationDirectory, IdentityApiConfig};
