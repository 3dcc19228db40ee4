use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginCommandError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(LoginCommandError::EmptyUsername);
        }
        if password.is_empty() {
            return Err(LoginCommandError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginUserInfo {
    pub id: Uuid,
    pub username: String,
    pub display_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginOutput {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: LoginUserInfo,
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Email address has not been verified")]
    EmailNotVerified,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<LoginOutput, LoginError>;
}
