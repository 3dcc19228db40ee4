use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserOutput, CreateUserUseCase, DeleteAccountError,
    DeleteAccountUseCase, LoginCommand, LoginError, LoginOutput, LoginUserUseCase, LogoutError,
    LogoutUserUseCase, VerifyEmailError, VerifyEmailUseCase,
};
use crate::auth::application::ports::outgoing::{
    TokenBlacklist, TokenBlacklistError, TokenClaims, TokenError, TokenProvider,
};
use crate::auth::application::services::token_hasher::hash_token;
use crate::comment::application::domain::entities::CommentThread;
use crate::comment::application::ports::incoming::use_cases::{
    AddCommentError, AddCommentUseCase, AddReplyError, AddReplyUseCase, CreatedComment,
    DeleteCommentError, DeleteCommentUseCase, GetCommentsError, GetCommentsUseCase,
};
use crate::email::application::ports::outgoing::{UserEmailNotificationError, UserEmailNotifier};
use crate::like::application::domain::entities::LikeOutcome;
use crate::like::application::ports::incoming::use_cases::{ToggleLikeError, ToggleLikeUseCase};
use crate::post::application::ports::incoming::use_cases::{
    CreatePostError, CreatePostUseCase, DeletePostError, DeletePostUseCase, GetPostError,
    GetPostUseCase, ListPostsError, ListPostsUseCase, PostCommand, UpdatePostError,
    UpdatePostUseCase,
};
use crate::post::application::ports::outgoing::{PageRequest, PageResult, PostListFilter, PostView};
use crate::stats::application::domain::entities::{CountType, StatsReport};
use crate::stats::application::ports::incoming::use_cases::{GetStatsError, GetStatsUseCase};
use crate::stats::application::ports::outgoing::StatsFilter;

// ============================================================================
// Auth ports
// ============================================================================

/// Token provider whose verdict ignores the token text.
pub struct StubTokenProvider {
    claims: Option<TokenClaims>,
}

impl StubTokenProvider {
    fn claims(user_id: Uuid, is_verified: bool) -> TokenClaims {
        let now = Utc::now().timestamp();
        TokenClaims {
            sub: user_id,
            exp: now + 3600,
            iat: now,
            nbf: now,
            iss: "admissions-tracker-test".to_string(),
            token_type: "access".to_string(),
            is_verified,
        }
    }

    pub fn valid(user_id: Uuid) -> Self {
        Self {
            claims: Some(Self::claims(user_id, true)),
        }
    }

    pub fn unverified(user_id: Uuid) -> Self {
        Self {
            claims: Some(Self::claims(user_id, false)),
        }
    }

    pub fn invalid() -> Self {
        Self { claims: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid, _is_verified: bool) -> Result<String, TokenError> {
        Ok(format!("token-for-{user_id}"))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        self.claims.clone().ok_or(TokenError::InvalidSignature)
    }

    fn access_token_expiry(&self) -> i64 {
        3600
    }
}

/// Blacklist with a fixed set of revoked raw tokens.
pub struct StaticBlacklist {
    revoked: HashSet<String>,
}

impl StaticBlacklist {
    pub fn empty() -> Self {
        Self {
            revoked: HashSet::new(),
        }
    }

    pub fn revoked(raw_token: &str) -> Self {
        Self {
            revoked: HashSet::from([hash_token(raw_token)]),
        }
    }
}

#[async_trait]
impl TokenBlacklist for StaticBlacklist {
    async fn blacklist(
        &self,
        _token_hash: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), TokenBlacklistError> {
        Ok(())
    }

    async fn is_blacklisted(&self, token_hash: &str) -> Result<bool, TokenBlacklistError> {
        Ok(self.revoked.contains(token_hash))
    }
}

#[derive(Default, Clone)]
pub struct StubUserEmailNotifier;

#[async_trait]
impl UserEmailNotifier for StubUserEmailNotifier {
    async fn send_verification_email(
        &self,
        _user: CreateUserOutput,
    ) -> Result<(), UserEmailNotificationError> {
        Ok(())
    }
}

// ============================================================================
// Auth use cases
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<CreateUserOutput, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubVerifyEmailUseCase;

#[async_trait]
impl VerifyEmailUseCase for StubVerifyEmailUseCase {
    async fn execute(&self, _token: &str) -> Result<(), VerifyEmailError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl LoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _command: LoginCommand) -> Result<LoginOutput, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutUserUseCase;

#[async_trait]
impl LogoutUserUseCase for StubLogoutUserUseCase {
    async fn execute(&self, _access_token: &str) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteAccountUseCase;

#[async_trait]
impl DeleteAccountUseCase for StubDeleteAccountUseCase {
    async fn execute(&self, _user: UserId, _access_token: &str) -> Result<(), DeleteAccountError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Post use cases
// ============================================================================

#[derive(Default, Clone)]
pub struct StubCreatePostUseCase;

#[async_trait]
impl CreatePostUseCase for StubCreatePostUseCase {
    async fn execute(
        &self,
        _owner: Option<UserId>,
        _command: PostCommand,
    ) -> Result<PostView, CreatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetPostUseCase;

#[async_trait]
impl GetPostUseCase for StubGetPostUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<PostView, GetPostError> {
        Err(GetPostError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubListPostsUseCase;

#[async_trait]
impl ListPostsUseCase for StubListPostsUseCase {
    async fn execute(
        &self,
        _filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, ListPostsError> {
        Ok(PageResult {
            items: vec![],
            page: page.page,
            per_page: page.per_page,
            total: 0,
        })
    }
}

#[derive(Default, Clone)]
pub struct StubUpdatePostUseCase;

#[async_trait]
impl UpdatePostUseCase for StubUpdatePostUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _user: UserId,
        _command: PostCommand,
    ) -> Result<PostView, UpdatePostError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeletePostUseCase;

#[async_trait]
impl DeletePostUseCase for StubDeletePostUseCase {
    async fn execute(&self, _post_id: Uuid, _user: UserId) -> Result<(), DeletePostError> {
        unimplemented!("Not used in this test")
    }
}

// ============================================================================
// Comment, like and stats use cases
// ============================================================================

#[derive(Default, Clone)]
pub struct StubAddCommentUseCase;

#[async_trait]
impl AddCommentUseCase for StubAddCommentUseCase {
    async fn execute(
        &self,
        _post_id: Uuid,
        _user: UserId,
        _content: &str,
    ) -> Result<CreatedComment, AddCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubAddReplyUseCase;

#[async_trait]
impl AddReplyUseCase for StubAddReplyUseCase {
    async fn execute(
        &self,
        _parent_id: Uuid,
        _user: UserId,
        _content: &str,
    ) -> Result<CreatedComment, AddReplyError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetCommentsUseCase;

#[async_trait]
impl GetCommentsUseCase for StubGetCommentsUseCase {
    async fn execute(&self, _post_id: Uuid) -> Result<Vec<CommentThread>, GetCommentsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCommentUseCase;

#[async_trait]
impl DeleteCommentUseCase for StubDeleteCommentUseCase {
    async fn execute(&self, _comment_id: Uuid, _user: UserId) -> Result<Uuid, DeleteCommentError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubToggleLikeUseCase;

#[async_trait]
impl ToggleLikeUseCase for StubToggleLikeUseCase {
    async fn execute(&self, _post_id: Uuid, _user: UserId) -> Result<LikeOutcome, ToggleLikeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetStatsUseCase;

#[async_trait]
impl GetStatsUseCase for StubGetStatsUseCase {
    async fn execute(
        &self,
        _filter: StatsFilter,
        _count_type: CountType,
    ) -> Result<StatsReport, GetStatsError> {
        unimplemented!("Not used in this test")
    }
}

pub fn stub_token_provider(user_id: Uuid) -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(StubTokenProvider::valid(user_id))
}
