// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
    async fn find_by_anonymous_username(
        &self,
        anonymous_username: &str,
    ) -> Result<Option<User>, UserQueryError>;
}
