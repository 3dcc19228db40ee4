use std::fmt;

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{TokenClaims, TokenError, TokenProvider};

use super::jwt_config::JwtConfig;

const ACCESS_TOKEN_TYPE: &str = "access";

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

#[cfg(not(tarpaulin_include))]
impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);
        validation
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> TokenError {
    match e.kind() {
        ErrorKind::ExpiredSignature => {
            tracing::debug!("Token rejected: expired");
            TokenError::TokenExpired
        }
        ErrorKind::ImmatureSignature => {
            tracing::warn!("Token rejected: not yet valid");
            TokenError::TokenNotYetValid
        }
        ErrorKind::InvalidSignature => {
            tracing::error!("Security alert: invalid token signature");
            TokenError::InvalidSignature
        }
        ErrorKind::InvalidIssuer => {
            tracing::warn!("Token rejected: unexpected issuer");
            TokenError::InvalidSignature
        }
        ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
            tracing::error!("Security alert: malformed token or unexpected algorithm");
            TokenError::MalformedToken
        }
        _ => {
            tracing::warn!(error = %e, "Token rejected: malformed");
            TokenError::MalformedToken
        }
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(
        &self,
        user_id: Uuid,
        is_verified: bool,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id,
            exp: (now + Duration::seconds(self.config.access_token_expiry)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: ACCESS_TOKEN_TYPE.to_string(),
            is_verified,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation())
            .map_err(map_decode_error)?
            .claims;

        if claims.token_type != ACCESS_TOKEN_TYPE {
            tracing::warn!(token_type = %claims.token_type, "Token type mismatch");
            return Err(TokenError::InvalidTokenType(ACCESS_TOKEN_TYPE.to_string()));
        }

        Ok(claims)
    }

    fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry
    }
}
