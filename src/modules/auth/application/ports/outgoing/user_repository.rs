use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub anonymous_username: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub verification_token_hash: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserResult {
    pub id: Uuid,
    pub username: String,
    pub anonymous_username: Option<String>,
    pub email: String,
    pub is_verified: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Verification token not found")]
    VerificationTokenNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    /// Activate the unverified user holding this token hash and clear the token.
    async fn activate_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<UserResult, UserRepositoryError>;

    /// Remove the user together with their likes, comments, posts and
    /// everything hanging off those posts.
    async fn delete_user_cascade(&self, user_id: Uuid) -> Result<(), UserRepositoryError>;
}
