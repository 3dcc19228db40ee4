mod json_config;
mod query_params;
mod response;

pub use json_config::{custom_json_config, custom_query_config};
pub use query_params::parse_filter;
pub use response::{ApiError, ApiResponse};
