use std::sync::Arc;

use actix_web::web;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::ports::incoming::use_cases::{
    DeleteAccountUseCase, LoginUserUseCase, LogoutUserUseCase, VerifyEmailUseCase,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentUseCase, AddReplyUseCase, DeleteCommentUseCase, GetCommentsUseCase,
};
use crate::like::application::ports::incoming::use_cases::ToggleLikeUseCase;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
};
use crate::post::application::post_use_cases::PostUseCases;
use crate::stats::application::ports::incoming::use_cases::GetStatsUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// `AppState` with stub use cases; override only what a test exercises.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    verify_email: Arc<dyn VerifyEmailUseCase + Send + Sync>,
    login_user: Arc<dyn LoginUserUseCase + Send + Sync>,
    logout_user: Arc<dyn LogoutUserUseCase + Send + Sync>,
    delete_account: Arc<dyn DeleteAccountUseCase + Send + Sync>,
    post: PostUseCases,
    comment: CommentUseCases,
    toggle_like: Arc<dyn ToggleLikeUseCase + Send + Sync>,
    get_stats: Arc<dyn GetStatsUseCase + Send + Sync>,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        Arc::new(StubUserEmailNotifier),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            verify_email: Arc::new(StubVerifyEmailUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            delete_account: Arc::new(StubDeleteAccountUseCase),
            post: PostUseCases {
                create: Arc::new(StubCreatePostUseCase),
                get_single: Arc::new(StubGetPostUseCase),
                get_list: Arc::new(StubListPostsUseCase),
                update: Arc::new(StubUpdatePostUseCase),
                delete: Arc::new(StubDeletePostUseCase),
            },
            comment: CommentUseCases {
                add_comment: Arc::new(StubAddCommentUseCase),
                add_reply: Arc::new(StubAddReplyUseCase),
                get_comments: Arc::new(StubGetCommentsUseCase),
                delete: Arc::new(StubDeleteCommentUseCase),
            },
            toggle_like: Arc::new(StubToggleLikeUseCase),
            get_stats: Arc::new(StubGetStatsUseCase),
        }
    }
}

impl TestAppStateBuilder {
    // ── Auth ──────────────────────────────────────────────

    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_verify_email(mut self, uc: Arc<dyn VerifyEmailUseCase + Send + Sync>) -> Self {
        self.verify_email = uc;
        self
    }

    pub fn with_login_user(mut self, uc: Arc<dyn LoginUserUseCase + Send + Sync>) -> Self {
        self.login_user = uc;
        self
    }

    pub fn with_logout_user(mut self, uc: Arc<dyn LogoutUserUseCase + Send + Sync>) -> Self {
        self.logout_user = uc;
        self
    }

    pub fn with_delete_account(mut self, uc: Arc<dyn DeleteAccountUseCase + Send + Sync>) -> Self {
        self.delete_account = uc;
        self
    }

    // ── Posts ─────────────────────────────────────────────

    pub fn with_create_post(mut self, uc: Arc<dyn CreatePostUseCase + Send + Sync>) -> Self {
        self.post.create = uc;
        self
    }

    pub fn with_get_post(mut self, uc: Arc<dyn GetPostUseCase + Send + Sync>) -> Self {
        self.post.get_single = uc;
        self
    }

    pub fn with_list_posts(mut self, uc: Arc<dyn ListPostsUseCase + Send + Sync>) -> Self {
        self.post.get_list = uc;
        self
    }

    pub fn with_update_post(mut self, uc: Arc<dyn UpdatePostUseCase + Send + Sync>) -> Self {
        self.post.update = uc;
        self
    }

    pub fn with_delete_post(mut self, uc: Arc<dyn DeletePostUseCase + Send + Sync>) -> Self {
        self.post.delete = uc;
        self
    }

    // ── Comments ──────────────────────────────────────────

    pub fn with_add_comment(mut self, uc: Arc<dyn AddCommentUseCase + Send + Sync>) -> Self {
        self.comment.add_comment = uc;
        self
    }

    pub fn with_add_reply(mut self, uc: Arc<dyn AddReplyUseCase + Send + Sync>) -> Self {
        self.comment.add_reply = uc;
        self
    }

    pub fn with_get_comments(mut self, uc: Arc<dyn GetCommentsUseCase + Send + Sync>) -> Self {
        self.comment.get_comments = uc;
        self
    }

    pub fn with_delete_comment(mut self, uc: Arc<dyn DeleteCommentUseCase + Send + Sync>) -> Self {
        self.comment.delete = uc;
        self
    }

    // ── Likes & stats ─────────────────────────────────────

    pub fn with_toggle_like(mut self, uc: Arc<dyn ToggleLikeUseCase + Send + Sync>) -> Self {
        self.toggle_like = uc;
        self
    }

    pub fn with_get_stats(mut self, uc: Arc<dyn GetStatsUseCase + Send + Sync>) -> Self {
        self.get_stats = uc;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            verify_email_use_case: self.verify_email,
            login_user_use_case: self.login_user,
            logout_user_use_case: self.logout_user,
            delete_account_use_case: self.delete_account,
            post: self.post,
            comment: self.comment,
            toggle_like_use_case: self.toggle_like,
            stats_use_case: self.get_stats,
        })
    }
}
