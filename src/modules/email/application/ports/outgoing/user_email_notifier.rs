use crate::auth::application::ports::incoming::use_cases::CreateUserOutput;

#[derive(Debug, thiserror::Error)]
pub enum UserEmailNotificationError {
    #[error("Missing verification token for user {0}")]
    MissingToken(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait UserEmailNotifier: Send + Sync {
    async fn send_verification_email(
        &self,
        user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError>;
}
