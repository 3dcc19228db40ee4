use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenBlacklistError {
    #[error("Token already expired")]
    AlreadyExpired,

    #[error("Blacklist store error: {0}")]
    StoreError(String),
}

/// Revoked access tokens, keyed by the SHA-256 of the raw token.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    async fn blacklist(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError>;

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError>;
}
