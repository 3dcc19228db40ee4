use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Access token is invalid")]
    InvalidToken,

    #[error("Token revocation failed: {0}")]
    RevocationFailed(String),
}

#[async_trait]
pub trait LogoutUserUseCase: Send + Sync {
    /// Revoke `access_token` until it would have expired on its own.
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError>;
}
