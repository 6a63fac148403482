use super::{BlogPost, OrgId, Organization};

/// Request-scoped tenant context, passed explicitly into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub org_id: OrgId,
    pub org_slug: Option<String>,
    pub user_id: String,
}

impl TenantContext {
    pub fn new(org_id: OrgId, user_id: impl Into<String>) -> Self {
        Self {
            org_id,
            org_slug: None,
            user_id: user_id.into(),
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.org_slug = Some(slug.into());
        self
    }

    /// Whether the active organization matches a slug taken from a URL.
    /// A context without a known slug matches any.
    pub fn matches_slug(&self, slug: &str) -> bool {
        self.org_slug.as_deref().is_none_or(|s| s == slug)
    }
}

/// Outcome of reading a tenant's feed.
#[derive(Debug, Clone)]
pub enum TenantFeed {
    /// No organization is active; nothing was fetched.
    NoOrganization,
    Organization {
        organization: Organization,
        posts: Vec<BlogPost>,
    },
}
