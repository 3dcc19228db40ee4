pub mod post_query;
pub mod post_repository;

pub use post_query::{
    PageRequest, PageRequestError, PageResult, PostListFilter, PostQuery, PostQueryError,
    PostView,
};
pub use post_repository::{PostRepository, PostRepositoryError};
