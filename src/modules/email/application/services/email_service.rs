use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::auth::application::ports::incoming::use_cases::CreateUserOutput;
use crate::email::application::ports::outgoing::{
    CommentNotification, CommentNotificationError, CommentNotifier, EmailSender,
    UserEmailNotificationError, UserEmailNotifier,
};

/// Renders account and comment emails and hands them to the configured sender.
#[derive(Clone)]
pub struct UserEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    app_url: String,
}

impl fmt::Debug for UserEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("app_url", &self.app_url)
            .finish()
    }
}

impl UserEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, app_url: impl Into<String>) -> Self {
        Self {
            sender,
            app_url: app_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn verification_link(&self, token: &str) -> String {
        format!("{}/api/auth/email-verification/{}", self.app_url, token)
    }

    fn post_link(&self, post_id: uuid::Uuid) -> String {
        format!("{}/api/posts/{}", self.app_url, post_id)
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[async_trait]
impl UserEmailNotifier for UserEmailService {
    async fn send_verification_email(
        &self,
        user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        if user.verification_token.is_empty() {
            return Err(UserEmailNotificationError::MissingToken(
                user.user_id.to_string(),
            ));
        }

        let link = self.verification_link(&user.verification_token);
        let body = format!(
            "<p>Hi {},</p>\
             <p>Thanks for signing up. Confirm your email address to activate your account:</p>\
             <p><a href=\"{link}\">{link}</a></p>\
             <p>If you did not create this account you can ignore this message.</p>",
            escape_html(&user.username),
        );

        self.sender
            .send_email(&user.email, "Verify your email address", &body)
            .await
            .map_err(UserEmailNotificationError::EmailSendingFailed)?;

        tracing::info!(user_id = %user.user_id, "Verification email sent");
        Ok(())
    }
}

#[async_trait]
impl CommentNotifier for UserEmailService {
    async fn notify_new_comment(
        &self,
        notification: CommentNotification,
    ) -> Result<(), CommentNotificationError> {
        let kind = if notification.is_reply { "reply" } else { "comment" };
        let subject = format!(
            "New {kind} on your {} post",
            notification.university
        );
        let body = format!(
            "<p>{} left a new {kind} on your post about {} at {}:</p>\
             <blockquote>{}</blockquote>\
             <p><a href=\"{link}\">{link}</a></p>",
            escape_html(&notification.commenter),
            escape_html(&notification.major),
            escape_html(&notification.university),
            escape_html(&notification.content),
            link = self.post_link(notification.post_id),
        );

        self.sender
            .send_email(&notification.recipient_email, &subject, &body)
            .await
            .map_err(CommentNotificationError::EmailSendingFailed)?;

        tracing::debug!(post_id = %notification.post_id, "Comment notification sent");
        Ok(())
    }
}
