use sea_orm::entity::prelude::*;

/// Enum-valued columns hold their upper-case label.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admission_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(nullable)]
    pub user_id: Option<Uuid>,
    pub degree_type: String,
    pub major: String,
    pub university: String,
    pub country: String,
    pub year: i32,
    pub term: String,
    pub application_round: String,
    pub status: String,
    #[sea_orm(nullable)]
    pub notification_method: Option<String>,
    #[sea_orm(nullable)]
    pub gpa: Option<f64>,
    pub gpa_scale: f64,
    #[sea_orm(nullable)]
    pub test_type: Option<String>,
    #[sea_orm(nullable)]
    pub test_score: Option<i32>,
    pub student_type: String,
    #[sea_orm(nullable)]
    pub continent: Option<String>,
    #[sea_orm(nullable)]
    pub state: Option<String>,
    pub financial_aid: bool,
    #[sea_orm(nullable)]
    pub scholarship: Option<String>,
    #[sea_orm(nullable)]
    pub post_grad_plans: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    #[sea_orm(nullable)]
    pub email: Option<String>,
    pub notify_comments: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Users,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        #[cfg(feature = "no_db_triggers")]
        {
            use sea_orm::ActiveValue::Set;

            if !_insert {
                self.updated_at = Set(chrono::Utc::now().into());
            }
        }

        Ok(self)
    }
}
