use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use super::notification::notify_post_owner;
use crate::auth::application::domain::entities::UserId;
use crate::comment::application::domain::entities::CommentContent;
use crate::comment::application::ports::incoming::use_cases::{
    AddReplyError, AddReplyUseCase, CreatedComment,
};
use crate::comment::application::ports::outgoing::{CommentQuery, CommentRepository, NewComment};
use crate::email::application::ports::outgoing::CommentNotifier;

#[derive(Clone)]
pub struct AddReplyService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    query: Q,
    repository: R,
    notifier: Arc<dyn CommentNotifier + Send + Sync>,
}

impl<Q, R> AddReplyService<Q, R>
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
impl<Q, R> AddReplyUseCase for AddReplyService<Q, R>
where
    Q: CommentQuery + Send + Sync,
    R: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        parent_id: Uuid,
        user: UserId,
        content: &str,
    ) -> Result<CreatedComment, AddReplyError> {
        let query_err = |e: crate::comment::application::ports::outgoing::CommentQueryError| {
            AddReplyError::RepositoryError(e.to_string())
        };

        let parent = self
            .query
            .find_by_id(parent_id)
            .await
            .map_err(query_err)?
            .ok_or(AddReplyError::ParentNotFound)?;

        let content = CommentContent::parse(content).map_err(|_| AddReplyError::EmptyContent)?;

        if parent.is_reply() {
            return Err(AddReplyError::DepthExceeded);
        }

        let target = self
            .query
            .find_post_target(parent.post_id)
            .await
            .map_err(query_err)?
            .ok_or(AddReplyError::ParentNotFound)?;

        let record = self
            .repository
            .create(NewComment {
                post_id: parent.post_id,
                user_id: user.value(),
                parent_id: Some(parent.id),
                content,
            })
            .await
            .map_err(|e| AddReplyError::RepositoryError(e.to_string()))?;

        info!(
            post_id = %record.post_id,
            parent_id = %parent.id,
            comment_id = %record.id,
            user_id = %user,
            "Reply added"
        );

        notify_post_owner(&self.notifier, target, &record);
        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::comment::application::domain::entities::fixtures::record;
    use crate::comment::application::services::mocks::{
        stored, target, MockQuery, MockRepo, RecordingNotifier,
    };

    fn service(
        query: MockQuery,
        repo: MockRepo,
        notifier: Arc<RecordingNotifier>,
    ) -> AddReplyService<MockQuery, MockRepo> {
        AddReplyService::new(query, repo, notifier)
    }

    #[tokio::test]
    async fn reply_lands_on_parent_post() {
        let post_id = Uuid::new_v4();
        let parent = record(post_id, None, "alice", "question?", 0);
        let parent_id = parent.id;

        let mut query = MockQuery::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));
        query
            .expect_find_post_target()
            .withf(move |id| *id == post_id)
            .returning(|id| Ok(Some(target(id, None, None))));

        let mut repo = MockRepo::new();
        repo.expect_create()
            .withf(move |c| c.post_id == post_id && c.parent_id == Some(parent_id))
            .returning(|c| Ok(stored(&c, "bob")));

        let created = service(query, repo, Arc::new(RecordingNotifier::default()))
            .execute(parent_id, UserId::from(Uuid::new_v4()), "answer")
            .await
            .unwrap();

        assert_eq!(created.comment_content, "answer");
        assert_eq!(created.comment_user, "bob");
    }

    #[tokio::test]
    async fn missing_parent_is_reported() {
        let mut query = MockQuery::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let result = service(query, MockRepo::new(), Arc::new(RecordingNotifier::default()))
            .execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()), "answer")
            .await;

        assert!(matches!(result, Err(AddReplyError::ParentNotFound)));
    }

    #[tokio::test]
    async fn empty_reply_is_rejected() {
        let parent = record(Uuid::new_v4(), None, "alice", "question?", 0);
        let mut query = MockQuery::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));

        let result = service(query, MockRepo::new(), Arc::new(RecordingNotifier::default()))
            .execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()), " \n ")
            .await;

        assert!(matches!(result, Err(AddReplyError::EmptyContent)));
    }

    #[tokio::test]
    async fn replying_to_a_reply_is_rejected() {
        let post_id = Uuid::new_v4();
        let nested = record(post_id, Some(Uuid::new_v4()), "bob", "answer", 1);
        let mut query = MockQuery::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(nested.clone())));
        let mut repo = MockRepo::new();
        repo.expect_create().never();

        let result = service(query, repo, Arc::new(RecordingNotifier::default()))
            .execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()), "deeper")
            .await;

        assert!(matches!(result, Err(AddReplyError::DepthExceeded)));
    }

    #[tokio::test]
    async fn reply_notification_is_flagged() {
        let post_id = Uuid::new_v4();
        let parent = record(post_id, None, "alice", "question?", 0);
        let mut query = MockQuery::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(parent.clone())));
        query
            .expect_find_post_target()
            .returning(|id| Ok(Some(target(id, Some(Uuid::new_v4()), Some("owner@example.com")))));
        let mut repo = MockRepo::new();
        repo.expect_create().returning(|c| Ok(stored(&c, "bob")));
        let notifier = Arc::new(RecordingNotifier::default());

        service(query, repo, notifier.clone())
            .execute(Uuid::new_v4(), UserId::from(Uuid::new_v4()), "answer")
            .await
            .unwrap();

        tokio::time::timeout(Duration::from_secs(1), notifier.notify.notified())
            .await
            .expect("notification should be sent");

        let sent = notifier.sent.lock().unwrap();
        assert!(sent[0].is_reply);
        assert_eq!(sent[0].post_id, post_id);
    }
}
