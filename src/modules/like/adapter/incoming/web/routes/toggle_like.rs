use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{authentication_required, VerifiedUser};
use crate::like::application::domain::entities::LikeOutcome;
use crate::like::application::ports::incoming::use_cases::ToggleLikeError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_toggle_like_error(err: ToggleLikeError, post_id: &Uuid) -> HttpResponse {
    match err {
        ToggleLikeError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        ToggleLikeError::RepositoryError(msg) => {
            error!(post_id = %post_id, error = %msg, "Failed to toggle like");
            ApiResponse::internal_error()
        }
    }
}

/// Like or unlike a post
///
/// Flips the caller's like. `likes_count` and `liked` sit next to `success: true`.
#[utoipa::path(
    post,
    path = "/api/like/{post_id}/",
    tag = "likes",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Like toggled", body = LikeOutcome),
        (status = 403, description = "Caller is not signed in", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/like/{post_id}/")]
pub async fn toggle_like_handler(
    user: Option<VerifiedUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(user) = user else {
        return authentication_required();
    };
    let post_id = path.into_inner();

    match data.toggle_like_use_case.execute(post_id, user.id()).await {
        Ok(outcome) => ApiResponse::flat(outcome),
        Err(e) => map_toggle_like_error(e, &post_id),
    }
}
