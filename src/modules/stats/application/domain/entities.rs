use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use utoipa::ToSchema;

use crate::post::application::domain::entities::PostStatus;

/// Fixed, non-overlapping partition of post statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusGroup {
    Admissions,
    Rejections,
    InProgress,
    Questions,
    /// Counted only in the group total.
    Unclassified,
}

impl StatusGroup {
    /// The four groups that get their own counter.
    pub const COUNTED: [StatusGroup; 4] = [
        StatusGroup::Admissions,
        StatusGroup::Rejections,
        StatusGroup::InProgress,
        StatusGroup::Questions,
    ];

    pub fn statuses(self) -> Vec<PostStatus> {
        PostStatus::ALL
            .iter()
            .copied()
            .filter(|status| StatusGroup::from(*status) == self)
            .collect()
    }

    /// Result column holding this group's counter.
    pub fn count_column(self) -> &'static str {
        match self {
            StatusGroup::Admissions => "admissions_count",
            StatusGroup::Rejections => "rejections_count",
            StatusGroup::InProgress => "in_progress_count",
            StatusGroup::Questions => "questions_count",
            StatusGroup::Unclassified => "unclassified_count",
        }
    }
}

impl From<PostStatus> for StatusGroup {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Accepted | PostStatus::AcceptedFromWaitlist | PostStatus::Enrolled => {
                StatusGroup::Admissions
            }
            PostStatus::Rejected | PostStatus::RejectedFromWaitlist => StatusGroup::Rejections,
            PostStatus::Applied
            | PostStatus::Applying
            | PostStatus::Waitlisted
            | PostStatus::Interview => StatusGroup::InProgress,
            PostStatus::Question => StatusGroup::Questions,
            PostStatus::Notes => StatusGroup::Unclassified,
        }
    }
}

/// Which posts feed the grouped rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CountType {
    #[default]
    All,
    Admissions,
    Rejections,
    InProgress,
    Questions,
}

impl CountType {
    /// Status group the rows are restricted to, if any.
    pub fn group(self) -> Option<StatusGroup> {
        match self {
            CountType::All => None,
            CountType::Admissions => Some(StatusGroup::Admissions),
            CountType::Rejections => Some(StatusGroup::Rejections),
            CountType::InProgress => Some(StatusGroup::InProgress),
            CountType::Questions => Some(StatusGroup::Questions),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CountType::All => "all",
            CountType::Admissions => "admissions",
            CountType::Rejections => "rejections",
            CountType::InProgress => "in_progress",
            CountType::Questions => "questions",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown count type '{0}'")]
pub struct UnknownCountType(pub String);

impl FromStr for CountType {
    type Err = UnknownCountType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CountType::All),
            "admissions" => Ok(CountType::Admissions),
            "rejections" => Ok(CountType::Rejections),
            "in_progress" => Ok(CountType::InProgress),
            "questions" => Ok(CountType::Questions),
            _ => Err(UnknownCountType(s.to_string())),
        }
    }
}

impl fmt::Display for CountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counters for one (university, major, degree_type, year, term) combination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatsRow {
    #[schema(example = "Stanford University")]
    pub university: String,
    #[schema(example = "Computer Science")]
    pub major: String,
    #[schema(example = "MS")]
    pub degree_type: String,
    #[schema(example = 2025)]
    pub year: i32,
    #[schema(example = "FALL")]
    pub term: String,
    pub admissions_count: i64,
    pub rejections_count: i64,
    pub in_progress_count: i64,
    pub questions_count: i64,
    pub total_count: i64,
}

/// Values offered by the dashboard's filter drop-downs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilterOptions {
    pub universities: Vec<String>,
    pub majors: Vec<String>,
    pub degree_types: Vec<String>,
    /// Newest first.
    pub years: Vec<i32>,
    pub terms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatsReport {
    pub count_type: CountType,
    pub rows: Vec<StatsRow>,
    pub filter_options: FilterOptions,
}
