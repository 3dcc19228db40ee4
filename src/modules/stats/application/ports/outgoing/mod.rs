pub mod stats_query;

pub use stats_query::{StatsFilter, StatsQuery, StatsQueryError};
