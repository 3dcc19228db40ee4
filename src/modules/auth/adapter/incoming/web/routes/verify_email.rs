use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::VerifyEmailError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct VerifyEmailResponse {
    #[schema(example = "Email verified successfully")]
    message: String,
}

fn map_verify_email_error(err: VerifyEmailError) -> HttpResponse {
    match err {
        VerifyEmailError::InvalidToken => ApiResponse::bad_request(
            "INVALID_TOKEN",
            "Verification link is invalid or has already been used",
        ),
        VerifyEmailError::RepositoryError(msg) => {
            tracing::error!(error = %msg, "Email verification failed");
            ApiResponse::internal_error()
        }
    }
}

/// Verify an email address
///
/// Activates the account that owns the token from the verification email.
#[utoipa::path(
    get,
    path = "/api/auth/email-verification/{token}",
    tag = "auth",
    params(("token" = String, Path, description = "Token from the verification email")),
    responses(
        (status = 200, description = "Account activated", body = inline(SuccessResponse<VerifyEmailResponse>)),
        (status = 400, description = "Unknown or used token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/auth/email-verification/{token}")]
pub async fn verify_user_email_handler(
    token: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.verify_email_use_case.execute(&token).await {
        Ok(()) => ApiResponse::success(VerifyEmailResponse {
            message: "Email verified successfully".to_string(),
        }),
        Err(e) => map_verify_email_error(e),
    }
}
