use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{
    PostCommand, UpdatePostError, UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{
    PostQuery, PostRepository, PostRepositoryError, PostView,
};

#[derive(Clone)]
pub struct UpdatePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdatePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }

    async fn load(&self, post_id: Uuid) -> Result<PostView, UpdatePostError> {
        self.query
            .find_by_id(post_id)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::NotFound)
    }
}

#[async_trait]
impl<Q, R> UpdatePostUseCase for UpdatePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        user: UserId,
        command: PostCommand,
    ) -> Result<PostView, UpdatePostError> {
        let existing = self.load(post_id).await?;

        if existing.user_id != Some(user.value()) {
            warn!(post_id = %post_id, user_id = %user, "Rejected edit of a post the user does not own");
            return Err(UpdatePostError::Forbidden);
        }

        self.repository
            .update(post_id, command)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => UpdatePostError::NotFound,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post_id, user_id = %user, "Admission post updated");

        self.load(post_id).await
    }
}
