mod add_comment;
mod add_reply;
mod delete_comment;
mod get_comments;

pub use add_comment::*;
pub use add_reply::*;
pub use delete_comment::*;
pub use get_comments::*;
