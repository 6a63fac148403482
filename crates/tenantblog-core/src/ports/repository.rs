use async_trait::async_trait;

use crate::domain::{BlogPost, NewBlogPost, OrgId};
use crate::error::RepoError;

/// Blog post storage. Posts are never updated or deleted.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Insert one post; storage assigns `id` and `created_at`.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// All posts whose `org_id` equals `org_id`. Unordered.
    async fn find_by_org(&self, org_id: &OrgId) -> Result<Vec<BlogPost>, RepoError>;
}
