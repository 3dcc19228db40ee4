use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{authentication_required, VerifiedUser};
use crate::comment::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedCommentBody {
    /// Post the deleted comment belonged to.
    pub post_id: Uuid,
}

fn map_delete_comment_error(err: DeleteCommentError, comment_id: &Uuid) -> HttpResponse {
    match err {
        DeleteCommentError::NotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        DeleteCommentError::Forbidden => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own comments")
        }
        DeleteCommentError::RepositoryError(msg) => {
            error!(comment_id = %comment_id, error = %msg, "Failed to delete comment");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a comment
///
/// Removes the comment and its direct replies. Only the author may delete.
#[utoipa::path(
    post,
    path = "/api/delete_comment/{comment_id}/",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Comment id")),
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Comment deleted", body = DeletedCommentBody),
        (status = 403, description = "Caller is not signed in or not the author", body = ErrorResponse),
        (status = 404, description = "Comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/delete_comment/{comment_id}/")]
pub async fn delete_comment_handler(
    user: Option<VerifiedUser>,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(user) = user else {
        return authentication_required();
    };
    let comment_id = path.into_inner();

    match data.comment.delete.execute(comment_id, user.id()).await {
        Ok(post_id) => ApiResponse::flat(DeletedCommentBody { post_id }),
        Err(e) => map_delete_comment_error(e, &comment_id),
    }
}
