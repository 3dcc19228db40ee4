use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::{
    incoming::use_cases::{DeleteAccountError, DeleteAccountUseCase},
    outgoing::{TokenBlacklist, TokenProvider, UserRepository, UserRepositoryError},
};
use crate::auth::application::services::logout_user_service::revoke_access_token;

#[derive(Clone)]
pub struct DeleteAccountService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
    blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
}

impl<R> DeleteAccountService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
        blacklist: Arc<dyn TokenBlacklist + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            token_provider,
            blacklist,
        }
    }
}

#[async_trait]
impl<R> DeleteAccountUseCase for DeleteAccountService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user: UserId, access_token: &str) -> Result<(), DeleteAccountError> {
        self.repository
            .delete_user_cascade(user.value())
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteAccountError::UserNotFound,
                other => DeleteAccountError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user, "Account deleted");

        // Revocation failure is logged; the deletion still succeeds.
        if let Err(e) = revoke_access_token(
            self.token_provider.as_ref(),
            self.blacklist.as_ref(),
            access_token,
        )
        .await
        {
            warn!(user_id = %user, error = %e, "Could not revoke token of deleted account");
        }

        Ok(())
    }
}
