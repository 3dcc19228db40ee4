use std::sync::Mutex;

use async_trait::async_trait;
use mockall::mock;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::comment::application::domain::entities::CommentRecord;
use crate::comment::application::ports::outgoing::{
    CommentQuery, CommentQueryError, CommentRepository, CommentRepositoryError, NewComment,
    PostTarget,
};
use crate::email::application::ports::outgoing::{
    CommentNotification, CommentNotificationError, CommentNotifier,
};

mock! {
    pub Query {}
    #[async_trait]
    impl CommentQuery for Query {
        async fn find_by_id(&self, comment_id: Uuid) -> Result<Option<CommentRecord>, CommentQueryError>;
        async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<CommentRecord>, CommentQueryError>;
        async fn find_post_target(&self, post_id: Uuid) -> Result<Option<PostTarget>, CommentQueryError>;
    }
}

mock! {
    pub Repo {}
    #[async_trait]
    impl CommentRepository for Repo {
        async fn create(&self, comment: NewComment) -> Result<CommentRecord, CommentRepositoryError>;
        async fn delete_cascade(&self, comment_id: Uuid) -> Result<(), CommentRepositoryError>;
    }
}

/// Records notifications and wakes waiters on each one.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<CommentNotification>>,
    pub notify: Notify,
}

#[async_trait]
impl CommentNotifier for RecordingNotifier {
    async fn notify_new_comment(
        &self,
        notification: CommentNotification,
    ) -> Result<(), CommentNotificationError> {
        self.sent.lock().unwrap().push(notification);
        self.notify.notify_one();
        Ok(())
    }
}

pub fn stored(comment: &NewComment, author: &str) -> CommentRecord {
    CommentRecord {
        id: Uuid::new_v4(),
        post_id: comment.post_id,
        user_id: comment.user_id,
        parent_id: comment.parent_id,
        content: comment.content.as_str().to_string(),
        author: author.to_string(),
        created_at: chrono::Utc::now(),
    }
}

pub fn target(post_id: Uuid, owner_id: Option<Uuid>, notify_email: Option<&str>) -> PostTarget {
    PostTarget {
        post_id,
        owner_id,
        university: "MIT".to_string(),
        major: "Physics".to_string(),
        notify_email: notify_email.map(str::to_string),
    }
}
