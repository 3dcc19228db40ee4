use rand::{distributions::Alphanumeric, Rng};
use sha2::{Digest, Sha256};

pub const VERIFICATION_TOKEN_LEN: usize = 64;

/// SHA-256 hex digest of a token. Raw tokens are never persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Opaque single-use token mailed to new accounts.
pub fn generate_verification_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(VERIFICATION_TOKEN_LEN)
        .map(char::from)
        .collect()
}
