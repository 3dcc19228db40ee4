use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserOutput, CreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::UserEmailNotifier;

const VERIFICATION_EMAIL_ATTEMPTS: u32 = 3;

pub const REGISTRATION_MESSAGE: &str =
    "Account created. Please check your email to verify your account.";

#[derive(Debug, Clone)]
pub struct UserRegistrationOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub anonymous_username: Option<String>,
    pub message: String,
}

impl From<CreateUserOutput> for UserRegistrationOutput {
    fn from(output: CreateUserOutput) -> Self {
        Self {
            user_id: output.user_id,
            username: output.username,
            email: output.email,
            anonymous_username: output.anonymous_username,
            message: REGISTRATION_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),
}

/// Creates the account, then mails the verification link in the background.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
    email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn CreateUserUseCase + Send + Sync>,
        email_notifier: Arc<dyn UserEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            email_notifier,
        }
    }

    pub async fn register_user(
        &self,
        command: CreateUserCommand,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(command).await?;

        let notifier = self.email_notifier.clone();
        let user_for_email = created_user.clone();

        tokio::spawn(async move {
            for attempt in 1..=VERIFICATION_EMAIL_ATTEMPTS {
                match notifier.send_verification_email(user_for_email.clone()).await {
                    Ok(()) => return,
                    Err(e) if attempt < VERIFICATION_EMAIL_ATTEMPTS => {
                        tracing::warn!(
                            user_id = %user_for_email.user_id,
                            attempt,
                            error = %e,
                            "Verification email failed, retrying"
                        );
                        tokio::time::sleep(Duration::from_secs(2_u64.pow(attempt))).await;
                    }
                    Err(e) => {
                        tracing::error!(
                            user_id = %user_for_email.user_id,
                            error = %e,
                            "Giving up on verification email"
                        );
                    }
                }
            }
        });

        Ok(created_user.into())
    }
}
