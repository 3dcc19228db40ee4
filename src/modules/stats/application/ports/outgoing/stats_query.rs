use async_trait::async_trait;

use crate::post::application::domain::entities::{DegreeType, Term};
use crate::stats::application::domain::entities::{CountType, StatsRow};

/// Optional, ANDed filters. University and major match case-insensitive substrings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsFilter {
    pub university: Option<String>,
    pub major: Option<String>,
    pub degree_type: Option<DegreeType>,
    pub year: Option<i32>,
    pub term: Option<Term>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait StatsQuery: Send + Sync {
    async fn grouped_counts(
        &self,
        filter: &StatsFilter,
        count_type: CountType,
    ) -> Result<Vec<StatsRow>, StatsQueryError>;

    /// Sorted ascending.
    async fn distinct_universities(&self) -> Result<Vec<String>, StatsQueryError>;

    /// Sorted ascending.
    async fn distinct_majors(&self) -> Result<Vec<String>, StatsQueryError>;

    /// Newest first.
    async fn distinct_years(&self) -> Result<Vec<i32>, StatsQueryError>;
}
