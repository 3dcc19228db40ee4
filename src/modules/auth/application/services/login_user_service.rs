use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{LoginCommand, LoginError, LoginOutput, LoginUserInfo, LoginUserUseCase},
    outgoing::{PasswordHasher, TokenProvider, UserQuery},
};

#[derive(Clone)]
pub struct LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<Q> LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl<Q> LoginUserUseCase for LoginUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError> {
        let user = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let password_ok = self
            .password_hasher
            .verify_password(command.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !password_ok {
            return Err(LoginError::InvalidCredentials);
        }

        // Checked after the password so unverified accounts are not enumerable.
        if !user.is_verified {
            return Err(LoginError::EmailNotVerified);
        }

        let access_token = self
            .token_provider
            .generate_access_token(user.id, user.is_verified)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginOutput {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_provider.access_token_expiry(),
            user: LoginUserInfo {
                id: user.id,
                display_name: user.display_name(),
                username: user.username,
                email: user.email,
            },
        })
    }
}
