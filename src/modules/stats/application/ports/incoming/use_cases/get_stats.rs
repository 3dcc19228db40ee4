use async_trait::async_trait;

use crate::stats::application::domain::entities::{CountType, StatsReport};
use crate::stats::application::ports::outgoing::{StatsFilter, StatsQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStatsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<StatsQueryError> for GetStatsError {
    fn from(e: StatsQueryError) -> Self {
        GetStatsError::QueryFailed(e.to_string())
    }
}

#[async_trait]
pub trait GetStatsUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: StatsFilter,
        count_type: CountType,
    ) -> Result<StatsReport, GetStatsError>;
}
