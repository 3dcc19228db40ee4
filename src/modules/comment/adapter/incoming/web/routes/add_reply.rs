use actix_web::{post, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use super::add_comment::{empty_content, CommentInput};
use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{authentication_required, VerifiedUser};
use crate::comment::application::ports::incoming::use_cases::{AddReplyError, CreatedComment};
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_add_reply_error(err: AddReplyError, comment_id: &Uuid) -> HttpResponse {
    match err {
        AddReplyError::EmptyContent => empty_content(),
        AddReplyError::DepthExceeded => ApiResponse::bad_request(
            "REPLY_DEPTH_EXCEEDED",
            "Replies can only be added to top-level comments",
        ),
        AddReplyError::ParentNotFound => {
            ApiResponse::not_found("COMMENT_NOT_FOUND", "Comment not found")
        }
        AddReplyError::RepositoryError(msg) => {
            error!(comment_id = %comment_id, error = %msg, "Failed to add reply");
            ApiResponse::internal_error()
        }
    }
}

/// Reply to a top-level comment
///
/// Same response shape as a new comment.
#[utoipa::path(
    post,
    path = "/api/reply/{comment_id}/",
    tag = "comments",
    params(("comment_id" = Uuid, Path, description = "Parent comment id")),
    request_body = CommentInput,
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Reply stored", body = CreatedComment),
        (status = 400, description = "Content is empty or the parent is itself a reply", body = ErrorResponse),
        (status = 403, description = "Caller is not signed in", body = ErrorResponse),
        (status = 404, description = "Parent comment not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/reply/{comment_id}/")]
pub async fn add_reply_handler(
    user: Option<VerifiedUser>,
    path: web::Path<Uuid>,
    payload: web::Json<CommentInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(user) = user else {
        return authentication_required();
    };
    let comment_id = path.into_inner();

    match data
        .comment
        .add_reply
        .execute(comment_id, user.id(), &payload.content)
        .await
    {
        Ok(reply) => ApiResponse::flat(reply),
        Err(e) => map_add_reply_error(e, &comment_id),
    }
}
