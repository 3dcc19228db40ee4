use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::comment::application::domain::entities::CommentThread;
use crate::comment::application::ports::incoming::use_cases::GetCommentsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct CommentsBody {
    pub comments: Vec<CommentThread>,
}

fn map_get_comments_error(err: GetCommentsError, post_id: &Uuid) -> HttpResponse {
    match err {
        GetCommentsError::QueryFailed(msg) => {
            error!(post_id = %post_id, error = %msg, "Failed to load comments");
            ApiResponse::internal_error()
        }
    }
}

/// List the comments of a post
///
/// Top-level comments oldest first, each with its replies oldest first.
/// An unknown post yields an empty list.
#[utoipa::path(
    get,
    path = "/api/comments/{post_id}/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comment threads", body = CommentsBody),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/comments/{post_id}/")]
pub async fn get_comments_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.comment.get_comments.execute(post_id).await {
        Ok(comments) => ApiResponse::flat(CommentsBody { comments }),
        Err(e) => map_get_comments_error(e, &post_id),
    }
}
