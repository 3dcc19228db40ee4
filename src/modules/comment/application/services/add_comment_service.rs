use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::notification::notify_post_owner;
use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::CommentContent;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, CreatedComment,
};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentRepository, NewComment};
use crate::email::application::ports::outgoing::CommentNotifier;

#[derive(Clone)]
pub struct AddCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn CommentNotifier + Send + Sync>,
}

impl<Q, R> AddCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, notifier: Arc<dyn CommentNotifier + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            notifier,
        }
    }
}

#[async_trait]
impl<Q, R> AddCommentUseCase for AddCommentService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        post_id: Uuid,
        user: UserId,
        content: &str,
    ) -> Result<CreatedComment, AddCommentError> {
        let content = CommentContent::parse(content).map_err(|_| AddCommentError::EmptyContent)?;

        let target = self
            .query
            .find_post_target(post_id)
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?
            .ok_or(AddCommentError::PostNotFound)?;

        let record = self
            .repository
            .create(NewComment {
                post_id,
                user_id: user.value(),
                parent_id: None,
                content,
            })
            .await
            .map_err(|e| AddCommentError::RepositoryError(e.to_string()))?;

        info!(post_id = %post_id, comment_id = %record.id, user_id = %user, "Comment added");

        notify_post_owner(&self.notifier, target, &record);
        Ok(record.into())
    }
}
