mod create_post;
mod delete_post;
mod get_post;
mod list_posts;
mod post_command;
mod update_post;

#[cfg(test)]
pub(crate) use post_command::fixtures;

pub use create_post::{CreatePostError, CreatePostUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use get_post::{GetPostError, GetPostUseCase};
pub use list_posts::{ListPostsError, ListPostsUseCase};
pub use post_command::{PostCommand, PostInput, PostValidationError};
pub use update_post::{UpdatePostError, UpdatePostUseCase};
