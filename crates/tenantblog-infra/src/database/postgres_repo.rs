//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter};

use tenantblog_core::domain::{BlogPost, NewBlogPost, OrgId};
use tenantblog_core::error::RepoError;
use tenantblog_core::ports::BlogPostRepository;

use super::entity::blog::{self, Entity as BlogEntity};

/// PostgreSQL blog post repository.
pub struct PostgresBlogPostRepository {
    pub(crate) db: DbConn,
}

impl PostgresBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => {
            let msg = other.to_string();
            if msg.contains("violates") || msg.contains("value too long") {
                RepoError::Constraint(msg)
            } else {
                RepoError::Query(msg)
            }
        }
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        // id and createdAt come from column defaults
        let row = blog::ActiveModel {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            org_id: Set(post.org_id.into_inner()),
            created_at: NotSet,
        };

        let model = BlogEntity::insert(row)
            .exec_with_returning(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(post_id = %model.id, org_id = %model.org_id, "Inserted blog post");
        model.try_into()
    }

    async fn find_by_org(&self, org_id: &OrgId) -> Result<Vec<BlogPost>, RepoError> {
        let rows = BlogEntity::find()
            .filter(blog::Column::OrgId.eq(org_id.as_str()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(org_id = %org_id, count = rows.len(), "Loaded blog posts");
        rows.into_iter().map(BlogPost::try_from).collect()
    }
}
