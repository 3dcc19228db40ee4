use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Stored password hash is unreadable: {0}")]
    MalformedHash(String),

    #[error("Hashing task was cancelled")]
    TaskFailed,
}

/// Slow, salted hashing for account passwords.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// `Ok(false)` means the password does not match; errors are reserved for
    /// hashes that cannot be parsed or tasks that died.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
