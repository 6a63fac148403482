//! Blog use cases: Create-Post and Tenant Feed.

use std::sync::Arc;

use crate::domain::{BlogPost, PostDraft, TenantContext, TenantFeed};
use crate::error::DomainError;
use crate::ports::{BlogPostRepository, OrganizationDirectory};

/// Blog operations over a repository and the organization directory.
pub struct BlogService {
    posts: Arc<dyn BlogPostRepository>,
    organizations: Arc<dyn OrganizationDirectory>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn BlogPostRepository>,
        organizations: Arc<dyn OrganizationDirectory>,
    ) -> Self {
        Self {
            posts,
            organizations,
        }
    }

    /// Create a post in the caller's active organization.
    ///
    /// Fails with [`DomainError::MissingOrganization`] when no organization is
    /// active and with [`DomainError::Validation`] for a bad draft; in both
    /// cases nothing is written.
    pub async fn create_post(
        &self,
        tenant: Option<&TenantContext>,
        draft: PostDraft,
    ) -> Result<BlogPost, DomainError> {
        let tenant = tenant.ok_or(DomainError::MissingOrganization)?;
        let new_post = draft.into_new_post(tenant.org_id.clone())?;

        Ok(self.posts.insert(new_post).await?)
    }

    /// Posts of the caller's active organization, with its metadata.
    pub async fn tenant_feed(
        &self,
        tenant: Option<&TenantContext>,
    ) -> Result<TenantFeed, DomainError> {
        let Some(tenant) = tenant else {
            return Ok(TenantFeed::NoOrganization);
        };

        let organization = self.organizations.get_organization(&tenant.org_id).await?;
        let posts = self.posts.find_by_org(&tenant.org_id).await?;

        Ok(TenantFeed::Organization {
            organization,
            posts,
        })
    }

    /// Posts of the caller's active organization, without metadata.
    pub async fn list_posts(&self, tenant: &TenantContext) -> Result<Vec<BlogPost>, DomainError> {
        Ok(self.posts.find_by_org(&tenant.org_id).await?)
    }
}
