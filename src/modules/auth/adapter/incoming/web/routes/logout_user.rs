use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::VerifiedUser;
use crate::auth::application::ports::incoming::use_cases::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponseBody {
    #[schema(example = "Logged out")]
    message: String,
}

fn map_logout_error(err: LogoutError) -> HttpResponse {
    match err {
        LogoutError::InvalidToken => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }
        LogoutError::RevocationFailed(msg) => {
            tracing::error!(error = %msg, "Token revocation failed");
            ApiResponse::internal_error()
        }
    }
}

/// Sign out
///
/// Revokes the bearer token used for this request.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Token revoked", body = inline(SuccessResponse<LogoutResponseBody>)),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_user_use_case.execute(&user.access_token).await {
        Ok(()) => {
            tracing::info!(user_id = %user.user_id, "User logged out");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out".to_string(),
            })
        }
        Err(e) => map_logout_error(e),
    }
}
