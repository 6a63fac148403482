//! In-memory blog post repository - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use tenantblog_core::domain::{BlogPost, NewBlogPost, OrgId, TITLE_MAX_CHARS};
use tenantblog_core::error::RepoError;
use tenantblog_core::ports::BlogPostRepository;

/// Blog posts held in a `Vec` behind an async RwLock.
///
/// Applies the same title length constraint as the `blog` table.
/// Note: Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    rows: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        if post.title.chars().count() > TITLE_MAX_CHARS {
            return Err(RepoError::Constraint(format!(
                "value too long for title (max {TITLE_MAX_CHARS})"
            )));
        }

        let row = BlogPost {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            org_id: post.org_id,
            created_at: Utc::now().date_naive(),
        };

        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn find_by_org(&self, org_id: &OrgId) -> Result<Vec<BlogPost>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| &p.org_id == org_id).cloned().collect())
    }
}
