use async_trait::async_trait;
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{VerifyEmailError, VerifyEmailUseCase},
    outgoing::{UserRepository, UserRepositoryError},
};
use crate::auth::application::services::token_hasher::hash_token;

#[derive(Debug, Clone)]
pub struct VerifyEmailService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> VerifyEmailService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> VerifyEmailUseCase for VerifyEmailService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(VerifyEmailError::InvalidToken);
        }

        let user = self
            .repository
            .activate_by_token_hash(&hash_token(token))
            .await
            .map_err(|e| match e {
                UserRepositoryError::VerificationTokenNotFound
                | UserRepositoryError::UserNotFound => VerifyEmailError::InvalidToken,
                other => VerifyEmailError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, "Email verified");
        Ok(())
    }
}
