pub mod get_stats_service;

pub use get_stats_service::GetStatsService;
