use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::ports::incoming::use_cases::{LoginCommand, LoginError, LoginOutput};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// DTO
// ──────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    access_token: String,
    #[schema(example = "Bearer")]
    token_type: String,
    /// Seconds until the access token expires
    #[schema(example = 1800)]
    expires_in: i64,
    user: LoginUserResponse,
}

#[derive(Serialize, ToSchema)]
pub struct LoginUserResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "johndoe")]
    username: String,
    /// Alias shown publicly, or "Anonymous User"
    #[schema(example = "gradhopeful")]
    display_name: String,
    #[schema(example = "john@example.com")]
    email: String,
}

impl From<LoginOutput> for LoginResponse {
    fn from(out: LoginOutput) -> Self {
        Self {
            access_token: out.access_token,
            token_type: out.token_type,
            expires_in: out.expires_in,
            user: LoginUserResponse {
                id: out.user.id.to_string(),
                username: out.user.username,
                display_name: out.user.display_name,
                email: out.user.email,
            },
        }
    }
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_login_error(err: LoginError, username: &str) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!(username = %username, "Login rejected: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        LoginError::EmailNotVerified => {
            ApiResponse::forbidden("EMAIL_NOT_VERIFIED", "Please verify your email first")
        }
        other => {
            error!(username = %username, error = %other, "Login failed");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Sign in
///
/// Exchanges username and password for a bearer access token.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Missing username or password", body = ErrorResponse),
        (
            status = 401,
            description = "Invalid credentials",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid username or password" }
            })
        ),
        (status = 403, description = "Email not verified", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone();

    let command = match LoginCommand::new(req.username, req.password) {
        Ok(cmd) => cmd,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.login_user_use_case.execute(command).await {
        Ok(output) => {
            info!(user_id = %output.user.id, "User logged in");
            ApiResponse::success(LoginResponse::from(output))
        }
        Err(e) => map_login_error(e, &username),
    }
}
