use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    CreateUserRequest, LoginRequestDto, LoginResponse, LoginUserResponse, LogoutResponseBody,
    RegisterUserResponse, RegisteredUser, VerifyEmailResponse,
};
// Posts
use crate::post::application::ports::incoming::use_cases::PostInput;
use crate::post::application::ports::outgoing::{PageResult, PostView};
// Comments
use crate::comment::adapter::incoming::web::routes::{
    CommentInput, CommentsBody, DeletedCommentBody,
};
use crate::comment::application::domain::entities::{CommentThread, ReplyView};
use crate::comment::application::ports::incoming::use_cases::CreatedComment;
// Likes & stats
use crate::like::application::domain::entities::LikeOutcome;
use crate::stats::application::domain::entities::{CountType, FilterOptions, StatsReport, StatsRow};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Admissions Tracker API",
        version = "1.0.0",
        description = "Graduate admission results, discussion threads, likes and aggregate statistics",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::register_user_handler,
        crate::auth::adapter::incoming::web::routes::verify_user_email_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,

        // User endpoints
        crate::auth::adapter::incoming::web::routes::delete_account_handler,

        // Post endpoints
        crate::post::adapter::incoming::web::routes::create_post_handler,
        crate::post::adapter::incoming::web::routes::list_posts_handler,
        crate::post::adapter::incoming::web::routes::get_post_handler,
        crate::post::adapter::incoming::web::routes::update_post_handler,
        crate::post::adapter::incoming::web::routes::delete_post_handler,

        // Comment endpoints
        crate::comment::adapter::incoming::web::routes::add_comment_handler,
        crate::comment::adapter::incoming::web::routes::add_reply_handler,
        crate::comment::adapter::incoming::web::routes::get_comments_handler,
        crate::comment::adapter::incoming::web::routes::delete_comment_handler,

        // Like endpoints
        crate::like::adapter::incoming::web::routes::toggle_like_handler,

        // Stats endpoints
        crate::stats::adapter::incoming::web::routes::get_stats_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegisterUserResponse>,
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            CreateUserRequest,
            RegisterUserResponse,
            RegisteredUser,
            LoginRequestDto,
            LoginResponse,
            LoginUserResponse,
            LogoutResponseBody,
            VerifyEmailResponse,

            // Posts
            PostInput,
            PostView,
            PageResult<PostView>,

            // Comments
            CommentInput,
            CreatedComment,
            CommentsBody,
            CommentThread,
            ReplyView,
            DeletedCommentBody,

            // Likes & stats
            LikeOutcome,
            CountType,
            StatsRow,
            FilterOptions,
            StatsReport,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication endpoints"),
        (name = "users", description = "User management endpoints"),
        (name = "posts", description = "Admission result posts"),
        (name = "comments", description = "Comment threads on posts"),
        (name = "likes", description = "Post likes"),
        (name = "stats", description = "Aggregated admission statistics"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token returned by /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/posts",
            "/api/posts/{post_id}",
            "/api/comment/{post_id}/",
            "/api/reply/{comment_id}/",
            "/api/comments/{post_id}/",
            "/api/delete_comment/{comment_id}/",
            "/api/like/{post_id}/",
            "/stats/",
        ] {
            assert!(paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn bearer_scheme_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("BearerAuth"));
    }
}
