use actix_web::{get, web, HttpResponse, Responder};
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::GetPostError;
use crate::post::application::ports::outgoing::PostView;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn map_get_post_error(err: GetPostError, post_id: &Uuid) -> HttpResponse {
    match err {
        GetPostError::NotFound => ApiResponse::not_found("POST_NOT_FOUND", "Post not found"),
        GetPostError::QueryFailed(msg) => {
            tracing::error!(post_id = %post_id, error = %msg, "Failed to load admission post");
            ApiResponse::internal_error()
        }
    }
}

/// Get a single admission post
#[utoipa::path(
    get,
    path = "/api/posts/{post_id}",
    tag = "posts",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post found", body = inline(SuccessResponse<PostView>)),
        (status = 404, description = "Post not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts/{post_id}")]
pub async fn get_post_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.post.get_single.execute(post_id).await {
        Ok(post) => ApiResponse::success(post),
        Err(e) => map_get_post_error(e, &post_id),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::post::application::ports::incoming::use_cases::GetPostUseCase;
    use crate::post::application::ports::outgoing::post_query::fixtures::post_view;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    struct FixedGetPost {
        result: Result<PostView, GetPostError>,
    }

    #[async_trait]
    impl GetPostUseCase for FixedGetPost {
        async fn execute(&self, _post_id: Uuid) -> Result<PostView, GetPostError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<PostView, GetPostError>) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_get_post(Arc::new(FixedGetPost { result }))
                        .build(),
                )
                .service(get_post_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", Uuid::new_v4()))
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn returns_post_with_like_count() {
        let mut view = post_view(Uuid::new_v4(), None);
        view.likes_count = 12;

        let resp = call(Ok(view)).await;

        assert_eq!(resp.status(), 200);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["likes_count"], 12);
        assert_eq!(json["data"]["term"], "FALL");
        assert!(json["data"].get("email").is_none());
    }

    #[actix_web::test]
    async fn missing_post_is_not_found() {
        let resp = call(Err(GetPostError::NotFound)).await;

        assert_eq!(resp.status(), 404);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "POST_NOT_FOUND");
    }
}
