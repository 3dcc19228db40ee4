use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserCommandError, CreateUserError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// DTO
// ──────────────────────────────────────────────────────────

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// 3-30 characters: letters, digits, '.', '_' or '-'
    #[schema(example = "johndoe")]
    pub username: String,

    #[schema(example = "john@example.com")]
    pub email: String,

    /// 8-128 characters
    #[schema(example = "SecurePass123!")]
    pub password: String,

    /// Public alias shown on posts and comments
    #[schema(example = "gradhopeful")]
    #[serde(default)]
    pub anonymous_username: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "Account created. Please check your email to verify your account.")]
    message: String,
    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    #[schema(example = "johndoe")]
    username: String,
    #[schema(example = "john@example.com")]
    email: String,
    #[schema(example = "gradhopeful")]
    anonymous_username: Option<String>,
}

// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────

fn map_command_error(err: CreateUserCommandError) -> HttpResponse {
    let code = match err {
        CreateUserCommandError::UsernameLength | CreateUserCommandError::UsernameCharacters => {
            "INVALID_USERNAME"
        }
        CreateUserCommandError::InvalidEmail => "INVALID_EMAIL",
        CreateUserCommandError::PasswordLength => "INVALID_PASSWORD",
        CreateUserCommandError::AnonymousUsernameTooLong
        | CreateUserCommandError::AnonymousUsernameCharacters => "INVALID_ANONYMOUS_USERNAME",
    };
    ApiResponse::bad_request(code, &err.to_string())
}

fn map_create_user_error(err: CreateUserError, username: &str) -> HttpResponse {
    match err {
        CreateUserError::UsernameTaken => {
            ApiResponse::conflict("USERNAME_TAKEN", "Username is already taken")
        }
        CreateUserError::EmailTaken => {
            ApiResponse::conflict("EMAIL_TAKEN", "Email is already registered")
        }
        CreateUserError::AnonymousUsernameTaken => ApiResponse::conflict(
            "ANONYMOUS_USERNAME_TAKEN",
            "Anonymous username is already taken",
        ),
        CreateUserError::UserAlreadyExists => {
            warn!(username = %username, "Registration lost a uniqueness race");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        other => {
            error!(username = %username, error = %other, "User registration failed");
            ApiResponse::internal_error()
        }
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Register a new user
///
/// Creates an unverified account and mails a verification link.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<RegisterUserResponse>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_USERNAME",
                    "message": "Username must be between 3 and 30 characters"
                }
            })
        ),
        (
            status = 409,
            description = "Username, email or alias already in use",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_TAKEN", "message": "Email is already registered" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let username = req.username.clone();

    info!(username = %username, "User registration attempt");

    let command = match CreateUserCommand::new(
        req.username,
        req.email,
        req.password,
        req.anonymous_username,
    ) {
        Ok(cmd) => cmd,
        Err(e) => {
            warn!(username = %username, error = %e, "Invalid registration input");
            return map_command_error(e);
        }
    };

    match data.register_user_orchestrator.register_user(command).await {
        Ok(user) => {
            info!(user_id = %user.user_id, username = %user.username, "User created");

            ApiResponse::created(RegisterUserResponse {
                message: user.message,
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                    email: user.email,
                    anonymous_username: user.anonymous_username,
                },
            })
        }
        Err(UserRegistrationError::CreateUserFailed(e)) => map_create_user_error(e, &username),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
    use crate::auth::application::ports::incoming::use_cases::{
        CreateUserOutput, CreateUserUseCase,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubUserEmailNotifier;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    #[derive(Clone)]
    struct FixedCreateUser {
        result: Result<(), CreateUserError>,
    }

    #[async_trait]
    impl CreateUserUseCase for FixedCreateUser {
        async fn execute(
            &self,
            command: CreateUserCommand,
        ) -> Result<CreateUserOutput, CreateUserError> {
            self.result.clone().map(|_| CreateUserOutput {
                user_id: Uuid::new_v4(),
                username: command.username().to_string(),
                email: command.email().to_string(),
                anonymous_username: command.anonymous_username().map(str::to_string),
                verification_token: "t".repeat(64),
            })
        }
    }

    fn orchestrator(result: Result<(), CreateUserError>) -> Arc<UserRegistrationOrchestrator> {
        Arc::new(UserRegistrationOrchestrator::new(
            Arc::new(FixedCreateUser { result }),
            Arc::new(StubUserEmailNotifier),
        ))
    }

    fn body(username: &str, alias: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "username": username,
            "email": "Test@Example.com",
            "password": "SecurePass123!",
            "anonymous_username": alias,
        })
    }

    async fn post_register(
        result: Result<(), CreateUserError>,
        payload: serde_json::Value,
    ) -> (u16, serde_json::Value) {
        let app_state = TestAppStateBuilder::default()
            .with_register_user_orchestrator(orchestrator(result))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(register_user_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn register_returns_created_user() {
        let (status, json) = post_register(Ok(()), body("testuser", Some("gradhopeful"))).await;

        assert_eq!(status, 201);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["user"]["username"], "testuser");
        assert_eq!(json["data"]["user"]["email"], "test@example.com");
        assert_eq!(json["data"]["user"]["anonymous_username"], "gradhopeful");
        assert!(json["data"]["message"]
            .as_str()
            .unwrap()
            .contains("verify your account"));
    }

    #[actix_web::test]
    async fn register_rejects_short_username() {
        let (status, json) = post_register(Ok(()), body("ab", None)).await;

        assert_eq!(status, 400);
        assert_eq!(json["error"]["code"], "INVALID_USERNAME");
    }

    #[actix_web::test]
    async fn register_rejects_bad_alias() {
        let (status, json) = post_register(Ok(()), body("testuser", Some("has space"))).await;

        assert_eq!(status, 400);
        assert_eq!(json["error"]["code"], "INVALID_ANONYMOUS_USERNAME");
    }

    #[actix_web::test]
    async fn register_maps_taken_email_to_conflict() {
        let (status, json) =
            post_register(Err(CreateUserError::EmailTaken), body("testuser", None)).await;

        assert_eq!(status, 409);
        assert_eq!(json["error"]["code"], "EMAIL_TAKEN");
    }

    #[actix_web::test]
    async fn register_maps_taken_alias_to_conflict() {
        let (status, json) = post_register(
            Err(CreateUserError::AnonymousUsernameTaken),
            body("testuser", Some("gradhopeful")),
        )
        .await;

        assert_eq!(status, 409);
        assert_eq!(json["error"]["code"], "ANONYMOUS_USERNAME_TAKEN");
    }

    #[actix_web::test]
    async fn register_hides_repository_failures() {
        let (status, json) = post_register(
            Err(CreateUserError::RepositoryError("db down".to_string())),
            body("testuser", None),
        )
        .await;

        assert_eq!(status, 500);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
