use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostLikes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(PostLikes::UserId).uuid().not_null())
                    .col(ColumnDef::new(PostLikes::PostId).uuid().not_null())
                    .col(
                        ColumnDef::new(PostLikes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // One like per user and post.
                    .primary_key(
                        Index::create()
                            .name("pk_post_likes")
                            .col(PostLikes::UserId)
                            .col(PostLikes::PostId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_user_id")
                            .from(PostLikes::Table, PostLikes::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_post_id")
                            .from(PostLikes::Table, PostLikes::PostId)
                            .to(AdmissionPosts::Table, AdmissionPosts::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_post_likes_post_id
                ON post_likes (post_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostLikes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PostLikes {
    Table,
    UserId,
    PostId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum AdmissionPosts {
    Table,
    Id,
}
