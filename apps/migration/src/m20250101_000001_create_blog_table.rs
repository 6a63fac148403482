use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const ORG_ID_INDEX: &str = "idx_blog_org_id";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Blog::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Blog::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Blog::Content).text().not_null())
                    .col(ColumnDef::new(Blog::OrgId).text().not_null())
                    .col(
                        ColumnDef::new(Blog::CreatedAt)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(ORG_ID_INDEX)
                    .table(Blog::Table)
                    .col(Blog::OrgId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Blog {
    Table,
    Id,
    Title,
    Content,
    #[sea_orm(iden = "orgId")]
    OrgId,
    #[sea_orm(iden = "createdAt")]
    CreatedAt,
}
