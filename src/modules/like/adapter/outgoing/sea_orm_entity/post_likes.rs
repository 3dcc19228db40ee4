use sea_orm::entity::prelude::*;

/// Membership row: one per (user, post) pair.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "post_likes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub post_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Users,

    #[sea_orm(
        belongs_to = "crate::post::adapter::outgoing::sea_orm_entity::admission_posts::Entity",
        from = "Column::PostId",
        to = "crate::post::adapter::outgoing::sea_orm_entity::admission_posts::Column::Id"
    )]
    AdmissionPosts,
}

impl Related<crate::post::adapter::outgoing::sea_orm_entity::admission_posts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AdmissionPosts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
