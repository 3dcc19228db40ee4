use std::sync::Arc;

use tracing::warn;

use crate::comment::application::domain::entities::CommentRecord;
use crate::comment::application::ports::outgoing::PostTarget;
use crate::email::application::ports::outgoing::{CommentNotification, CommentNotifier};

/// Mail the post's contact address about a new comment without blocking the caller.
///
/// Skipped when the post did not opt in or the commenter owns the post.
pub(crate) fn notify_post_owner(
    notifier: &Arc<dyn CommentNotifier + Send + Sync>,
    target: PostTarget,
    record: &CommentRecord,
) {
    let Some(recipient_email) = target.notify_email else {
        return;
    };
    if target.owner_id == Some(record.user_id) {
        return;
    }

    let notification = CommentNotification {
        post_id: target.post_id,
        recipient_email,
        university: target.university,
        major: target.major,
        commenter: record.author.clone(),
        content: record.content.clone(),
        is_reply: record.is_reply(),
    };
    let notifier = notifier.clone();

    tokio::spawn(async move {
        let post_id = notification.post_id;
        if let Err(e) = notifier.notify_new_comment(notification).await {
            warn!(post_id = %post_id, error = %e, "Comment notification failed");
        }
    });
}
