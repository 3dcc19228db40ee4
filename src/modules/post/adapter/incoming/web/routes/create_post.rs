use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::{
    CreatePostError, PostCommand, PostInput, PostValidationError,
};
use crate::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

pub(super) fn post_validation_failed(err: PostValidationError) -> HttpResponse {
    ApiResponse::validation_failed("VALIDATION_ERROR", "Invalid post", err.fields)
}

fn map_create_post_error(err: CreatePostError) -> HttpResponse {
    match err {
        CreatePostError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create admission post");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Log an admission outcome
///
/// Signed-in callers own the post; without a valid token the post is anonymous.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "posts",
    request_body = PostInput,
    security((), ("BearerAuth" = [])),
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<PostView>)),
        (
            status = 400,
            description = "One or more fields are invalid",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Invalid post",
                    "fields": { "email": "Email is required to receive comment notifications" }
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    user: Option<VerifiedUser>,
    payload: web::Json<PostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match PostCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(e) => return post_validation_failed(e),
    };

    match data.post.create.execute(user.map(|u| u.id()), command).await {
        Ok(post) => ApiResponse::created(post),
        Err(e) => map_create_post_error(e),
    }
}
