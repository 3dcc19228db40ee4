use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::comment::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentRepository, CommentRepositoryError,
};

#[derive(Clone)]
pub struct DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteCommentUseCase for DeleteCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(&self, comment_id: Uuid, user: UserId) -> Result<Uuid, DeleteCommentError> {
        let comment = self
            .query
            .find_by_id(comment_id)
            .await
            .map_err(|e| DeleteCommentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteCommentError::NotFound)?;

        if comment.user_id != user.value() {
            return Err(DeleteCommentError::Forbidden);
        }

        self.repository
            .delete_cascade(comment_id)
            .await
            .map_err(|e| match e {
                CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
                other => DeleteCommentError::RepositoryError(other.to_string()),
            })?;

        info!(comment_id = %comment_id, post_id = %comment.post_id, user_id = %user, "Comment deleted");

        Ok(comment.post_id)
    }
}
