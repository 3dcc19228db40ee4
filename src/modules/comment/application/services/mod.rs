pub mod add_comment_service;
pub mod add_reply_service;
pub mod delete_comment_service;
pub mod get_comments_service;
mod notification;

#[cfg(test)]
pub(crate) mod mocks;

pub use add_comment_service::AddCommentService;
pub use add_reply_service::AddReplyService;
pub use delete_comment_service::DeleteCommentService;
pub use get_comments_service::GetCommentsService;
