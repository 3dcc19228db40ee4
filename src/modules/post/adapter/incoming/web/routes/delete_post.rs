use actix_web::{delete, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::VerifiedUser;
use crate::post::application::ports::incoming::use_cases::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_delete_post_error(err: DeletePostError, post_id: &Uuid) -> HttpResponse {
    match err {
        DeletePostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        DeletePostError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own posts")
        }
        DeletePostError::RepositoryError(msg) => {
            tracing::error!(post_id = %post_id, error = %msg, "Failed to delete admission post");
            ApiResponse::internal_error()
        }
    }
}

/// Delete an admission post
///
/// Removes the post together with its likes, comments and replies.
#[utoipa::path(
    delete,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 403, description = "Caller does not own the post", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/posts/{post_id}")]
pub async fn delete_post_handler(
    user: VerifiedUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.delete.execute(post_id, user.id()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(e) => map_delete_post_error(e, &post_id),
    }
}
