use std::sync::Arc;

use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, AddReplyUseCase, DeleteCommentUseCase, GetCommentsUseCase,
};

#[derive(Clone)]
pub struct CommentUseCases {
    pub add_comment: Arc<dyn AddCommentUseCase + Send + Sync>,
    pub add_reply: Arc<dyn AddReplyUseCase + Send + Sync>,
    pub get_comments: Arc<dyn GetCommentsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCommentUseCase + Send + Sync>,
}
