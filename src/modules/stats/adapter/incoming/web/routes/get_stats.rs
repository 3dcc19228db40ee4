use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::{parse_filter, ApiResponse};
use crate::shared::query::non_blank;
use crate::stats::application::domain::entities::{CountType, StatsReport};
use crate::stats::application::ports::incoming::use_cases::GetStatsError;
use crate::stats::application::ports::outgoing::StatsFilter;
use crate::AppState;

// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────

/// Blank values are ignored.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsQueryParams {
    /// Case-insensitive substring
    pub university: Option<String>,
    /// Case-insensitive substring
    pub major: Option<String>,
    pub degree_type: Option<String>,
    pub year: Option<String>,
    pub term: Option<String>,
    /// all, admissions, rejections, in_progress or questions (default all)
    pub count_type: Option<String>,
}

impl StatsQueryParams {
    fn into_parts(self) -> Result<(StatsFilter, CountType), HttpResponse> {
        let filter = StatsFilter {
            university: non_blank(self.university),
            major: non_blank(self.major),
            degree_type: parse_filter("degree_type", self.degree_type)?,
            year: parse_filter("year", self.year)?,
            term: parse_filter("term", self.term)?,
        };
        let count_type =
            parse_filter::<CountType>("count_type", self.count_type)?.unwrap_or_default();

        Ok((filter, count_type))
    }
}

// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────

/// Admission statistics
///
/// Post counts per (university, major, degree type, year, term), split by status group.
#[utoipa::path(
    get,
    path = "/stats/",
    tag = "stats",
    params(StatsQueryParams),
    responses(
        (status = 200, description = "Grouped counts and filter options", body = inline(SuccessResponse<StatsReport>)),
        (status = 400, description = "Unknown count type, degree type, term or non-numeric year", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/stats/")]
pub async fn get_stats_handler(
    query: web::Query<StatsQueryParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, count_type) = match query.into_inner().into_parts() {
        Ok(parts) => parts,
        Err(resp) => return resp,
    };

    match data.stats_use_case.execute(filter, count_type).await {
        Ok(report) => ApiResponse::success(report),
        Err(GetStatsError::QueryFailed(msg)) => {
            error!(count_type = %count_type, error = %msg, "Failed to build admission stats");
            ApiResponse::internal_error()
        }
    }
}
