mod add_comment;
mod add_reply;
mod delete_comment;
mod get_comments;

pub use add_comment::{AddCommentError, AddCommentUseCase, CreatedComment};
pub use add_reply::{AddReplyError, AddReplyUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use get_comments::{GetCommentsError, GetCommentsUseCase};
