pub mod create_post_service;
pub mod delete_post_service;
pub mod get_post_service;
pub mod list_posts_service;
pub mod update_post_service;

#[cfg(test)]
pub(crate) mod mocks;

pub use create_post_service::CreatePostService;
pub use delete_post_service::DeletePostService;
pub use get_post_service::GetPostService;
pub use list_posts_service::ListPostsService;
pub use update_post_service::UpdatePostService;
