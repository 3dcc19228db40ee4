use std::collections::BTreeMap;

use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::{authentication_required, VerifiedUser};
use crate::comment::application::ports::incoming::use_cases::{AddCommentError, CreatedComment};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CommentInput {
    #[serde(default)]
    #[schema(example = "Congrats! What was your GRE score?")]
    pub content: String,
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

pub(super) fn empty_content() -> HttpResponse {
    let mut fields = BTreeMap::new();
    fields.insert("content".to_string(), "This field is required".to_string());
    ApiResponse::validation_failed("EMPTY_CONTENT", "Comment content cannot be empty", fields)
}

fn map_add_comment_error(err: AddCommentError, post_id: &Uuid) -> HttpResponse {
    match err {
        AddCommentError::EmptyContent => empty_content(),
        AddCommentError::PostNotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        AddCommentError::RepositoryError(msg) => {
            error!(post_id = %post_id, error = %msg, "Failed to add comment");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Comment on an admission post
///
/// The comment fields are returned next to `success: true`.
#[utoipa::path(
    post,
    path = "/api/comment/{post_id}/",
    tag = "comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = CommentInput,
    security((), ("BearerAuth" = [])),
    responses(
        (status = 200, description = "Comment stored", body = CreatedComment),
        (status = 400, description = "Content is empty", body = ErrorResponse),
        (status = 403, description = "Caller is not signed in", body = ErrorResponse),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/comment/{post_id}/")]
pub async fn add_comment_handler(
    user: Option<VerifiedUser>,
    path: web::Path<Uuid>,
    payload: web::Json<CommentInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(user) = user else {
        return authentication_required();
    };
    let post_id = path.into_inner();

    match data
        .comment
        .add_comment
        .execute(post_id, user.id(), &payload.content)
        .await
    {
        Ok(comment) => ApiResponse::flat(comment),
        Err(e) => map_add_comment_error(e, &post_id),
    }
}
