// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{JsonConfig, QueryConfig};

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, post, test, web, App, HttpResponse, Responder};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Body {
        #[allow(dead_code)]
        content: String,
    }

    #[post("/echo")]
    async fn echo(_body: web::Json<Body>) -> impl Responder {
        HttpResponse::Ok().finish()
    }

    #[actix_web::test]
    async fn malformed_json_is_reported_as_validation_error() {
        let app = test::init_service(
            App::new()
                .app_data(custom_json_config())
                .service(echo),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/echo")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
