use std::sync::Arc;

use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{TokenBlacklist, TokenProvider};
use crate::auth::application::services::token_hasher::hash_token;
use crate::shared::api::ApiResponse;

/// Caller holding a valid, unrevoked access token for a verified account.
///
/// Handlers that serve anonymous callers too take `Option<VerifiedUser>`.
#[derive(Debug, Clone)]
pub struct VerifiedUser {
    pub user_id: Uuid,
    /// Raw bearer token, kept for revocation on logout and account deletion.
    pub access_token: String,
}

impl VerifiedUser {
    pub fn id(&self) -> UserId {
        UserId::from(self.user_id)
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl FromRequest for VerifiedUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let token_provider = req
            .app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
            .cloned();
        let blacklist = req
            .app_data::<web::Data<Arc<dyn TokenBlacklist + Send + Sync>>>()
            .cloned();
        let token = extract_token_from_header(req);

        Box::pin(async move {
            let (Some(token_provider), Some(blacklist)) = (token_provider, blacklist) else {
                tracing::error!("Auth extractor is missing token provider or blacklist app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let token = token.ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized(
                    "MISSING_AUTH_HEADER",
                    "Missing or invalid authorization header",
                ))
            })?;

            let claims = token_provider.verify_token(&token).map_err(|_| {
                create_api_error(ApiResponse::unauthorized(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))
            })?;

            match blacklist.is_blacklisted(&hash_token(&token)).await {
                Ok(false) => {}
                Ok(true) => {
                    return Err(create_api_error(ApiResponse::unauthorized(
                        "TOKEN_REVOKED",
                        "Token has been revoked",
                    )));
                }
                Err(e) => {
                    tracing::error!(error = %e, "Token blacklist lookup failed");
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            }

            if !claims.is_verified {
                return Err(create_api_error(ApiResponse::forbidden(
                    "EMAIL_NOT_VERIFIED",
                    "Email verification required",
                )));
            }

            Ok(VerifiedUser {
                user_id: claims.sub,
                access_token: token,
            })
        })
    }
}

/// Rejection for handlers where signing in is optional for the route but
/// required for the action.
pub fn authentication_required() -> HttpResponse {
    ApiResponse::forbidden("AUTHENTICATION_REQUIRED", "You must be signed in to do this")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{StubTokenProvider, StaticBlacklist};
    use actix_web::{get, test, App, Responder};

    #[get("/whoami")]
    async fn whoami(user: VerifiedUser) -> impl Responder {
        HttpResponse::Ok().body(user.user_id.to_string())
    }

    #[get("/maybe")]
    async fn maybe(user: Option<VerifiedUser>) -> impl Responder {
        match user {
            Some(u) => HttpResponse::Ok().body(u.user_id.to_string()),
            None => authentication_required(),
        }
    }

    macro_rules! app {
        ($provider:expr, $blacklist:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(
                        Arc::new($provider) as Arc<dyn TokenProvider + Send + Sync>
                    ))
                    .app_data(web::Data::new(
                        Arc::new($blacklist) as Arc<dyn TokenBlacklist + Send + Sync>
                    ))
                    .service(whoami)
                    .service(maybe),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn accepts_valid_token() {
        let user_id = Uuid::new_v4();
        let app = app!(StubTokenProvider::valid(user_id), StaticBlacklist::empty());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer good"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, user_id.to_string());
    }

    #[actix_web::test]
    async fn missing_header_is_unauthorized() {
        let app = app!(StubTokenProvider::valid(Uuid::new_v4()), StaticBlacklist::empty());

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn invalid_token_is_unauthorized() {
        let app = app!(StubTokenProvider::invalid(), StaticBlacklist::empty());

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer bad"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn revoked_token_is_rejected() {
        let app = app!(
            StubTokenProvider::valid(Uuid::new_v4()),
            StaticBlacklist::revoked("revoked-token")
        );

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer revoked-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "TOKEN_REVOKED");
    }

    #[actix_web::test]
    async fn unverified_account_is_forbidden() {
        let app = app!(
            StubTokenProvider::unverified(Uuid::new_v4()),
            StaticBlacklist::empty()
        );

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Bearer good"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
    }

    #[actix_web::test]
    async fn optional_extractor_yields_none_without_token() {
        let app = app!(StubTokenProvider::valid(Uuid::new_v4()), StaticBlacklist::empty());

        let req = test::TestRequest::get().uri("/maybe").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 403);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "AUTHENTICATION_REQUIRED");
    }
}
