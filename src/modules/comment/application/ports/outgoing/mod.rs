pub mod comment_query;
pub mod comment_repository;

pub use comment_query::{CommentQuery, CommentQueryError, PostTarget};
pub use comment_repository::{CommentRepository, CommentRepositoryError, NewComment};
