use std::sync::Arc;

use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};

#[derive(Clone)]
pub struct PostUseCases {
    pub create: Arc<dyn CreatePostUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetPostUseCase + Send + Sync>,
    pub get_list: Arc<dyn ListPostsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdatePostUseCase + Send + Sync>,
    pub delete: Arc<dyn DeletePostUseCase + Send + Sync>,
}
