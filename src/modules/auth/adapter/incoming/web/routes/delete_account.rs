use actix_web::{delete, web, HttpResponse, Responder};

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::VerifiedUser;
use crate::auth::application::ports::incoming::use_cases::DeleteAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_delete_account_error(err: DeleteAccountError, user_id: &uuid::Uuid) -> HttpResponse {
    match err {
        DeleteAccountError::UserNotFound => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        DeleteAccountError::RepositoryError(msg) => {
            tracing::error!(user_id = %user_id, error = %msg, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}

/// Delete own account
///
/// Removes the account with its posts, comments and likes, then revokes the token.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    security(("BearerAuth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing, invalid or revoked token", body = ErrorResponse),
        (status = 404, description = "Account already gone", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/me")]
pub async fn delete_account_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_account_use_case
        .execute(user.id(), &user.access_token)
        .await
    {
        Ok(()) => {
            tracing::info!(user_id = %user.user_id, "Account deleted");
            ApiResponse::no_content()
        }
        Err(e) => map_delete_account_error(e, &user.user_id),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::auth::application::domain::entities::UserId;
    use crate::auth::application::ports::incoming::use_cases::DeleteAccountUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{blacklist_data, token_provider_data, TEST_TOKEN};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use uuid::Uuid;

    struct RecordingDelete {
        result: Result<(), DeleteAccountError>,
        calls: Mutex<Vec<UserId>>,
    }

    #[async_trait]
    impl DeleteAccountUseCase for RecordingDelete {
        async fn execute(&self, user: UserId, _token: &str) -> Result<(), DeleteAccountError> {
            self.calls.lock().unwrap().push(user);
            self.result.clone()
        }
    }

    async fn call(user_id: Uuid, use_case: Arc<RecordingDelete>) -> u16 {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_delete_account(use_case)
                        .build(),
                )
                .app_data(token_provider_data(user_id))
                .app_data(blacklist_data())
                .service(delete_account_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/users/me")
            .insert_header(("Authorization", format!("Bearer {TEST_TOKEN}")))
            .to_request();
        test::call_service(&app, req).await.status().as_u16()
    }

    #[actix_web::test]
    async fn deletes_the_callers_account() {
        let user_id = Uuid::new_v4();
        let use_case = Arc::new(RecordingDelete {
            result: Ok(()),
            calls: Mutex::new(Vec::new()),
        });

        let status = call(user_id, use_case.clone()).await;

        assert_eq!(status, 204);
        assert_eq!(
            use_case.calls.lock().unwrap().as_slice(),
            [UserId::from(user_id)]
        );
    }

    #[actix_web::test]
    async fn missing_account_is_not_found() {
        let use_case = Arc::new(RecordingDelete {
            result: Err(DeleteAccountError::UserNotFound),
            calls: Mutex::new(Vec::new()),
        });

        assert_eq!(call(Uuid::new_v4(), use_case).await, 404);
    }
}
