use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdmissionPosts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdmissionPosts::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(AdmissionPosts::UserId).uuid())
                    .col(ColumnDef::new(AdmissionPosts::DegreeType).string_len(10).not_null())
                    .col(ColumnDef::new(AdmissionPosts::Major).string_len(100).not_null())
                    .col(ColumnDef::new(AdmissionPosts::University).string_len(200).not_null())
                    .col(ColumnDef::new(AdmissionPosts::Country).string_len(100).not_null())
                    .col(ColumnDef::new(AdmissionPosts::Year).integer().not_null())
                    .col(ColumnDef::new(AdmissionPosts::Term).string_len(10).not_null())
                    .col(
                        ColumnDef::new(AdmissionPosts::ApplicationRound)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdmissionPosts::Status).string_len(30).not_null())
                    .col(ColumnDef::new(AdmissionPosts::NotificationMethod).string_len(30))
                    .col(ColumnDef::new(AdmissionPosts::Gpa).double())
                    .col(
                        ColumnDef::new(AdmissionPosts::GpaScale)
                            .double()
                            .not_null()
                            .default(4.0),
                    )
                    .col(ColumnDef::new(AdmissionPosts::TestType).string_len(20))
                    .col(ColumnDef::new(AdmissionPosts::TestScore).integer())
                    .col(
                        ColumnDef::new(AdmissionPosts::StudentType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdmissionPosts::Continent).string_len(20))
                    .col(ColumnDef::new(AdmissionPosts::State).string_len(100))
                    .col(
                        ColumnDef::new(AdmissionPosts::FinancialAid)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AdmissionPosts::Scholarship).string_len(200))
                    .col(ColumnDef::new(AdmissionPosts::PostGradPlans).string_len(200))
                    .col(ColumnDef::new(AdmissionPosts::Notes).text())
                    .col(ColumnDef::new(AdmissionPosts::Email).string_len(255))
                    .col(
                        ColumnDef::new(AdmissionPosts::NotifyComments)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AdmissionPosts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AdmissionPosts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admission_posts_user_id")
                            .from(AdmissionPosts::Table, AdmissionPosts::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order and the stats grouping columns.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_admission_posts_created_at
                ON admission_posts (created_at DESC);
                CREATE INDEX IF NOT EXISTS idx_admission_posts_user_id
                ON admission_posts (user_id);
                CREATE INDEX IF NOT EXISTS idx_admission_posts_stats_group
                ON admission_posts (university, major, degree_type, year, term);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_admission_posts_updated_at
                BEFORE UPDATE ON admission_posts
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                "DROP TRIGGER IF EXISTS update_admission_posts_updated_at ON admission_posts",
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AdmissionPosts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdmissionPosts {
    Table,
    Id,
    UserId,
    DegreeType,
    Major,
    University,
    Country,
    Year,
    Term,
    ApplicationRound,
    Status,
    NotificationMethod,
    Gpa,
    GpaScale,
    TestType,
    TestScore,
    StudentType,
    Continent,
    State,
    FinancialAid,
    Scholarship,
    PostGradPlans,
    Notes,
    Email,
    NotifyComments,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
