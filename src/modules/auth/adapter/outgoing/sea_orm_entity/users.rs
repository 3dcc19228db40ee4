use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique, nullable)]
    pub anonymous_username: Option<String>,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    /// SHA-256 of the outstanding verification token; cleared once used.
    #[sea_orm(nullable)]
    pub verification_token_hash: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

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
