use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_users::Users;

/// The user's blog list. Blog ids are not foreign keys: removing an entry is a
/// separate write from deleting the blog.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBlogs::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserBlogs::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserBlogs::BlogId).uuid().not_null())
                    .col(
                        ColumnDef::new(UserBlogs::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserBlogs::UserId)
                            .col(UserBlogs::BlogId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_blogs_user_id")
                            .from(UserBlogs::Table, UserBlogs::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBlogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserBlogs {
    Table,
    UserId,
    BlogId,
    CreatedAt,
}
