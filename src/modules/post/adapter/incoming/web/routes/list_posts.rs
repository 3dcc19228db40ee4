use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::post::application::ports::incoming::use_cases::ListPostsError;
use crate::post::application::ports::outgoing::{
    PageRequest, PageResult, PostListFilter, PostView,
};
use crate::shared::api::{parse_filter, ApiResponse};
use crate::shared::query::non_blank;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────

/// Blank values are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListPostsQuery {
    /// Case-insensitive substring
    pub university: Option<String>,
    /// Case-insensitive substring
    pub major: Option<String>,
    pub degree_type: Option<String>,
    pub year: Option<String>,
    pub term: Option<String>,
    pub status: Option<String>,
    /// Starts at 1
    pub page: Option<String>,
    /// 1-100, default 20
    pub per_page: Option<String>,
}

impl ListPostsQuery {
    fn into_parts(self) -> Result<(PostListFilter, PageRequest), HttpResponse> {
        let filter = PostListFilter {
            university: non_blank(self.university),
            major: non_blank(self.major),
            degree_type: parse_filter("degree_type", self.degree_type)?,
            year: parse_filter("year", self.year)?,
            term: parse_filter("term", self.term)?,
            status: parse_filter("status", self.status)?,
        };

        let page = PageRequest::new(
            parse_filter("page", self.page)?,
            parse_filter("per_page", self.per_page)?,
        )
        .map_err(|e| ApiResponse::bad_request("INVALID_PAGINATION", &e.to_string()))?;

        Ok((filter, page))
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// List admission posts
///
/// Newest first, with optional filters and pagination.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "posts",
    params(ListPostsQuery),
    responses(
        (status = 200, description = "Page of posts", body = inline(SuccessResponse<PageResult<PostView>>)),
        (status = 400, description = "Invalid filter or pagination", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_posts_handler(
    query: web::Query<ListPostsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = match query.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(resp) => return resp,
    };

    match data.post.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(ListPostsError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list admission posts");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::post::application::domain::entities::{DegreeType, PostStatus, Term};
    use crate::post::application::ports::incoming::use_cases::ListPostsUseCase;
    use crate::post::application::ports::outgoing::post_query::fixtures::post_view;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::Value;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingList {
        calls: Mutex<Vec<(PostListFilter, PageRequest)>>,
    }

    #[async_trait]
    impl ListPostsUseCase for RecordingList {
        async fn execute(
            &self,
            filter: PostListFilter,
            page: PageRequest,
        ) -> Result<PageResult<PostView>, ListPostsError> {
            self.calls.lock().unwrap().push((filter, page));
            Ok(PageResult {
                items: vec![post_view(Uuid::new_v4(), None)],
                page: page.page,
                per_page: page.per_page,
                total: 1,
            })
        }
    }

    async fn call(use_case: Arc<RecordingList>, uri: &str) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_list_posts(use_case).build())
                .service(list_posts_handler),
        )
        .await;

        test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await
    }

    #[actix_web::test]
    async fn parses_filters_and_pagination() {
        let use_case = Arc::new(RecordingList::default());

        let resp = call(
            use_case.clone(),
            "/api/posts?university=MIT&degree_type=phd&year=2024&term=fall&status=REJECTED&page=2&per_page=5",
        )
        .await;

        assert_eq!(resp.status(), 200);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["page"], 2);
        assert_eq!(json["data"]["items"].as_array().unwrap().len(), 1);

        let calls = use_case.calls.lock().unwrap();
        let (filter, page) = &calls[0];
        assert_eq!(filter.university.as_deref(), Some("MIT"));
        assert_eq!(filter.degree_type, Some(DegreeType::Phd));
        assert_eq!(filter.year, Some(2024));
        assert_eq!(filter.term, Some(Term::Fall));
        assert_eq!(filter.status, Some(PostStatus::Rejected));
        assert_eq!(*page, PageRequest { page: 2, per_page: 5 });
    }

    #[actix_web::test]
    async fn blank_values_are_ignored() {
        let use_case = Arc::new(RecordingList::default());

        let resp = call(use_case.clone(), "/api/posts?university=&year=&term=").await;

        assert_eq!(resp.status(), 200);
        let calls = use_case.calls.lock().unwrap();
        assert_eq!(calls[0].0, PostListFilter::default());
        assert_eq!(calls[0].1, PageRequest::default());
    }

    #[actix_web::test]
    async fn unknown_term_is_rejected() {
        let use_case = Arc::new(RecordingList::default());

        let resp = call(use_case.clone(), "/api/posts?term=autumn").await;

        assert_eq!(resp.status(), 400);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_FILTER");
        assert!(use_case.calls.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn oversized_page_is_rejected() {
        let resp = call(Arc::new(RecordingList::default()), "/api/posts?per_page=500").await;

        assert_eq!(resp.status(), 400);
        let json: Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_PAGINATION");
    }
}
