//! Identity provider port.

use async_trait::async_trait;

use crate::domain::{OrgId, Organization};
use crate::error::IdentityError;

/// Read access to organizations managed by the external identity provider.
#[async_trait]
pub trait OrganizationDirectory: Send + Sync {
    async fn get_organization(&self, org_id: &OrgId) -> Result<Organization, IdentityError>;
}
