use std::str::FromStr;

use actix_web::HttpResponse;

use super::ApiResponse;
use crate::shared::query::non_blank;

/// Parse an optional query-string value, treating blanks as absent.
///
/// Unparseable values become a 400 `INVALID_FILTER` response naming the field.
pub fn parse_filter<T: FromStr>(field: &str, raw: Option<String>) -> Result<Option<T>, HttpResponse> {
    non_blank(raw)
        .map(|value| {
            value.parse().map_err(|_| {
                ApiResponse::bad_request("INVALID_FILTER", &format!("Invalid {field}: '{value}'"))
            })
        })
        .transpose()
}
