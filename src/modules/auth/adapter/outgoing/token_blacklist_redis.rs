use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};

use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenBlacklistError};

/// Revoked access tokens in Redis.
///
/// ```text
/// auth:blacklist:token:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// Key existence means revoked. Expiry is left to Redis.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token_hash: &str) -> String {
        format!("auth:blacklist:token:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenBlacklistError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError::StoreError(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl TokenBlacklist for RedisTokenBlacklist {
    async fn blacklist(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        let ttl = (expires_at - Utc::now()).num_seconds();
        if ttl <= 0 {
            return Err(TokenBlacklistError::AlreadyExpired);
        }

        let key = Self::token_key(token_hash);
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .cmd("SET")
            .arg(&key)
            .arg("1")
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(ttl)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))?;

        tracing::debug!(ttl, "Access token blacklisted");
        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self.get_conn().await?;

        conn.exists(Self::token_key(token_hash))
            .await
            .map_err(|e| TokenBlacklistError::StoreError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pool_for(url: &str) -> Arc<Pool> {
        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("pool config");
        Arc::new(pool)
    }

    /// `None` when no Redis is configured for this run.
    fn live_blacklist() -> Option<RedisTokenBlacklist> {
        let url = std::env::var("REDIS_URL").ok()?;
        Some(RedisTokenBlacklist::new(pool_for(&url)))
    }

    #[test]
    fn key_is_namespaced() {
        assert_eq!(
            RedisTokenBlacklist::token_key("abc"),
            "auth:blacklist:token:abc"
        );
    }

    #[tokio::test]
    async fn expired_token_is_rejected_before_touching_redis() {
        // Nothing listens here; the call must return before connecting.
        let blacklist = RedisTokenBlacklist::new(pool_for("redis://127.0.0.1:1"));

        let result = blacklist
            .blacklist("hash", Utc::now() - Duration::seconds(5))
            .await;

        assert!(matches!(result, Err(TokenBlacklistError::AlreadyExpired)));
    }

    #[tokio::test]
    async fn unreachable_store_reports_store_error() {
        let blacklist = RedisTokenBlacklist::new(pool_for("redis://127.0.0.1:1"));

        let result = blacklist.is_blacklisted("hash").await;

        assert!(matches!(result, Err(TokenBlacklistError::StoreError(_))));
    }

    #[tokio::test]
    async fn blacklisted_token_is_reported() {
        let Some(blacklist) = live_blacklist() else {
            eprintln!("REDIS_URL not set; skipping");
            return;
        };
        let hash = format!("test-{}", uuid::Uuid::new_v4());

        blacklist
            .blacklist(&hash, Utc::now() + Duration::seconds(30))
            .await
            .unwrap();

        assert!(blacklist.is_blacklisted(&hash).await.unwrap());
        assert!(!blacklist.is_blacklisted("never-seen").await.unwrap());
    }
}
