pub use sea_orm_migration::prelude::*;

mod m20250304_105428_create_users_table;
mod m20260301_090000_create_admission_posts_table;
mod m20260301_090100_create_comments_table;
mod m20260301_090200_create_post_likes_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250304_105428_create_users_table::Migration),
            Box::new(m20260301_090000_create_admission_posts_table::Migration),
            Box::new(m20260301_090100_create_comments_table::Migration),
            Box::new(m20260301_090200_create_post_likes_table::Migration),
        ]
    }
}
