use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::auth::application::ports::{
    incoming::use_cases::{LogoutError, LogoutUserUseCase},
    outgoing::{TokenBlacklist, TokenBlacklistError, TokenProvider},
};
use crate::auth::application::services::token_hasher::hash_token;

/// Blacklist `access_token` for the rest of its lifetime.
pub(crate) async fn revoke_access_token(
    token_provider: &(dyn TokenProvider + Send + Sync),
    blacklist: &(dyn TokenBlacklist + Send + Sync),
    access_token: &str,
) -> Result<(), LogoutError> {
    let claims = token_provider
        .verify_token(access_token)
        .map_err(|_| LogoutError::InvalidToken)?;

    let expires_at: DateTime<Utc> =
        DateTime::from_timestamp(claims.exp, 0).ok_or(LogoutError::InvalidToken)?;

    match blacklist.blacklist(&hash_token(access_token), expires_at).await {
        Ok(()) => {
            info!(user_id = %claims.sub, "Access token revoked");
            Ok(())
        }
        // Expired tokens are already rejected by signature validation.
        Err(TokenBlacklistError::AlreadyExpired) => Ok(()),
        Err(e) => Err(LogoutError::RevocationFailed(e.to_string())),
    }
}

#[derive(Clone)]
pub struct LogoutUserService {
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
}

impl LogoutUserService {
    pub fn new(
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    ) -> Self {
        Self {
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl LogoutUserUseCase for LogoutUserService {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError> {
        revoke_access_token(
            self.token_provider.as_ref(),
            self.blacklist.as_ref(),
            access_token,
        )
        .await
    }
}
