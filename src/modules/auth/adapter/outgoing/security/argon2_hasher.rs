use argon2::{
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
    },
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;
use rand_core::OsRng;

use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};

const DEFAULT_MEMORY_KIB: u32 = 4 * 1024;
const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2id, run on the blocking pool.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
    #[cfg(test)]
    salt_override: Option<SaltString>,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Argon2Hasher {
    /// Small-VPS profile: 4 MiB, 3 passes, 1 lane.
    pub fn new() -> Self {
        let params = Params::new(DEFAULT_MEMORY_KIB, DEFAULT_ITERATIONS, DEFAULT_PARALLELISM, None)
            .unwrap_or_default();

        Self {
            params,
            #[cfg(test)]
            salt_override: None,
        }
    }

    pub fn with_params(
        memory_kib: u32,
        iterations: u32,
        parallelism: u32,
    ) -> Result<Self, HashError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| HashError::HashFailed(format!("invalid Argon2 params: {e}")))?;

        Ok(Self {
            params,
            #[cfg(test)]
            salt_override: None,
        })
    }

    /// `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS`, `ARGON2_PARALLELISM`.
    pub fn from_env() -> Result<Self, HashError> {
        fn read(key: &str, default: u32) -> u32 {
            std::env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        }

        Self::with_params(
            read("ARGON2_MEMORY_KIB", DEFAULT_MEMORY_KIB),
            read("ARGON2_ITERATIONS", DEFAULT_ITERATIONS),
            read("ARGON2_PARALLELISM", DEFAULT_PARALLELISM),
        )
    }

    #[cfg(test)]
    fn with_fixed_salt(salt: &str) -> Self {
        Self {
            params: Params::default(),
            salt_override: Some(SaltString::from_b64(salt).expect("Invalid salt")),
        }
    }
}

#[async_trait]
impl PasswordHasher for Argon2Hasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let params = self.params.clone();

        #[cfg(test)]
        let salt_override = self.salt_override.clone();

        tokio::task::spawn_blocking(move || {
            let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

            #[cfg(test)]
            let salt = salt_override.unwrap_or_else(|| SaltString::generate(&mut OsRng));

            #[cfg(not(test))]
            let salt = SaltString::generate(&mut OsRng);

            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| HashError::HashFailed(e.to_string()))
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed =
                PasswordHash::new(&hash).map_err(|e| HashError::MalformedHash(e.to_string()))?;

            // Params come from the PHC string, not from self.
            match Argon2::default().verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(e) => Err(HashError::MalformedHash(e.to_string())),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
