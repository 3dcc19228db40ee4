use async_trait::async_trait;

use crate::post::application::domain::entities::{DegreeType, Term};
use crate::stats::application::domain::entities::{CountType, FilterOptions, StatsReport};
use crate::stats::application::ports::incoming::use_cases::{GetStatsError, GetStatsUseCase};
use crate::stats::application::ports::outgoing::{StatsFilter, StatsQuery};

#[derive(Clone)]
pub struct GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn filter_options(&self) -> Result<FilterOptions, GetStatsError> {
        let (universities, majors, years) = futures::try_join!(
            self.query.distinct_universities(),
            self.query.distinct_majors(),
            self.query.distinct_years(),
        )?;

        Ok(FilterOptions {
            universities,
            majors,
            degree_types: DegreeType::ALL.iter().map(|d| d.as_str().to_string()).collect(),
            years,
            terms: Term::ALL.iter().map(|t| t.as_str().to_string()).collect(),
        })
    }
}

#[async_trait]
impl<Q> GetStatsUseCase for GetStatsService<Q>
where
    Q: StatsQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: StatsFilter,
        count_type: CountType,
    ) -> Result<StatsReport, GetStatsError> {
        let rows = self.query.grouped_counts(&filter, count_type).await?;
        let filter_options = self.filter_options().await?;

        Ok(StatsReport {
            count_type,
            rows,
            filter_options,
        })
    }
}
