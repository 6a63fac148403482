//! Blog entity for SeaORM.
//!
//! Column names follow the existing `blog` table (`"orgId"`, `"createdAt"`).

use sea_orm::entity::prelude::*;

use tenantblog_core::domain::{BlogPost, OrgId};
use tenantblog_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "orgId", column_type = "Text")]
    pub org_id: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
///
/// Rows with an empty `orgId` cannot be represented and are rejected.
impl TryFrom<Model> for BlogPost {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let org_id = OrgId::new(model.org_id)
            .map_err(|_| RepoError::Query(format!("blog {} has no orgId", model.id)))?;

        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            org_id,
            created_at: model.created_at,
        })
    }
}
