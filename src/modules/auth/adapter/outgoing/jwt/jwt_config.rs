use std::env;

const DEFAULT_ACCESS_EXPIRY: i64 = 1800;
const MAX_ACCESS_EXPIRY: i64 = 86_400;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    /// Seconds.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_ACCESS_EXPIRY`.
    ///
    /// Panics on missing or out-of-range values; only called during startup.
    pub fn from_env() -> Self {
        let secret_key = env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        if secret_key.len() < 32 {
            panic!("JWT_SECRET must be at least 32 characters long for HS256");
        }

        let access_token_expiry = match env::var("JWT_ACCESS_EXPIRY") {
            Ok(raw) => raw
                .parse::<i64>()
                .unwrap_or_else(|_| panic!("Invalid JWT_ACCESS_EXPIRY value: {raw}")),
            Err(_) => DEFAULT_ACCESS_EXPIRY,
        };
        if access_token_expiry <= 0 || access_token_expiry > MAX_ACCESS_EXPIRY {
            panic!("JWT_ACCESS_EXPIRY must be between 1 and {MAX_ACCESS_EXPIRY} seconds");
        }

        let issuer =
            env::var("JWT_ISSUER").unwrap_or_else(|_| "admissions-tracker".to_string());

        Self {
            secret_key,
            issuer,
            access_token_expiry,
        }
    }
}
