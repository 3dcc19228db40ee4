use uuid::Uuid;

/// A new comment or reply landed on a post whose author asked to be notified.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNotification {
    pub post_id: Uuid,
    pub recipient_email: String,
    pub university: String,
    pub major: String,
    pub commenter: String,
    pub content: String,
    pub is_reply: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CommentNotificationError {
    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait CommentNotifier: Send + Sync {
    async fn notify_new_comment(
        &self,
        notification: CommentNotification,
    ) -> Result<(), CommentNotificationError>;
}
