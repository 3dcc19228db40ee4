use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Verification token is invalid or already used")]
    InvalidToken,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait VerifyEmailUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), VerifyEmailError>;
}
