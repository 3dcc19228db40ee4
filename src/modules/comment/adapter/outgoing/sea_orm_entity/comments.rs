use sea_orm::entity::prelude::*;

/// A row with `parent_id` set is a reply.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(nullable)]
    pub parent_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::post::adapter::outgoing::sea_orm_entity::admission_posts::Entity",
        from = "Column::PostId",
        to = "crate::post::adapter::outgoing::sea_orm_entity::admission_posts::Column::Id"
    )]
    AdmissionPosts,

    #[sea_orm(
        belongs_to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::auth::adapter::outgoing::sea_orm_entity::users::Column::Id"
    )]
    Users,

    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,
}

impl Related<crate::auth::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
