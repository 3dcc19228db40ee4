use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::like::application::domain::entities::LikeOutcome;
use crate::like::application::ports::incoming::use_cases::{ToggleLikeError, ToggleLikeUseCase};
use crate::like::application::ports::outgoing::{LikeRepository, LikeRepositoryError};

#[derive(Clone)]
pub struct ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    repository: R,
}

impl<R> ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ToggleLikeUseCase for ToggleLikeService<R>
where
    R: LikeRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, user: UserId) -> Result<LikeOutcome, ToggleLikeError> {
        let outcome = self
            .repository
            .toggle(post_id, user.value())
            .await
            .map_err(|e| match e {
                LikeRepositoryError::PostNotFound => ToggleLikeError::PostNotFound,
                other => ToggleLikeError::RepositoryError(other.to_string()),
            })?;

        debug!(
            post_id = %post_id,
            user_id = %user,
            liked = outcome.liked,
            likes_count = outcome.likes_count,
            "Like toggled"
        );

        Ok(outcome)
    }
}
