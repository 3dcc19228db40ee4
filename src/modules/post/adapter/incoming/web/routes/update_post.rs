use actix_web::{put, web, HttpResponse, Responder};
use uuid::Uuid;

use super::create_post::post_validation_failed;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::{
    PostCommand, PostInput, UpdatePostError,
};
use crate::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_update_post_error(err: UpdatePostError, post_id: &Uuid) -> HttpResponse {
    match err {
        UpdatePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        UpdatePostError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You can only edit your own posts")
        }
        UpdatePostError::RepositoryError(msg) => {
            tracing::error!(post_id = %post_id, error = %msg, "Failed to update admission post");
            ApiResponse::internal_error()
        }
    }
}

/// Replace an admission post
///
/// Only the owner may edit; anonymous posts are read-only.
#[utoipa::path(
    put,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = PostInput,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Post updated", body = inline(SuccessResponse<PostView>)),
        (status = 400, description = "One or more fields are invalid", body = ErrorResponse),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the post", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/posts/{post_id}")]
pub async fn update_post_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    payload: web::Json<PostInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    let command = match PostCommand::new(payload.into_inner()) {
        Ok(command) => command,
        Err(e) => return post_validation_failed(e),
    };

    match data.post.update.execute(post_id, user.id(), command).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => map_update_post_error(e, &post_id),
    }
}
