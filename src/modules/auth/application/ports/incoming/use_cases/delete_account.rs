use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteAccountError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user: UserId, access_token: &str) -> Result<(), DeleteAccountError>;
}
