use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::post::application::ports::incoming::use_cases::{DeletePostError, DeletePostUseCase};
use crate::post::application::ports::outgoing::{PostQuery, PostRepository, PostRepositoryError};

#[derive(Clone)]
pub struct DeletePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeletePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeletePostUseCase for DeletePostService<Q, R>
where
    Q: PostQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, post_id: Uuid, user: UserId) -> Result<(), DeletePostError> {
        let post = self
            .query
            .find_by_id(post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?
            .ok_or(DeletePostError::NotFound)?;

        if post.user_id != Some(user.value()) {
            warn!(post_id = %post_id, user_id = %user, "Rejected delete of a post the user does not own");
            return Err(DeletePostError::Forbidden);
        }

        self.repository
            .delete_cascade(post_id)
            .await
            .map_err(|e| match e {
                PostRepositoryError::NotFound => DeletePostError::NotFound,
                other => DeletePostError::RepositoryError(other.to_string()),
            })?;

        info!(post_id = %post_id, user_id = %user, "Admission post deleted");
        Ok(())
    }
}
