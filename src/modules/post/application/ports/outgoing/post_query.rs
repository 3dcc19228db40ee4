use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::post::application::domain::entities::{
    Continent, DegreeType, PostStatus, StudentType, Term,
};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Public view of an admission post. The contact email is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PostView {
    pub id: Uuid,
    /// None for anonymous posts
    pub user_id: Option<Uuid>,
    #[schema(value_type = String, example = "MS")]
    pub degree_type: DegreeType,
    pub major: String,
    pub university: String,
    pub country: String,
    pub year: i32,
    #[schema(value_type = String, example = "FALL")]
    pub term: Term,
    pub application_round: String,
    #[schema(value_type = String, example = "ACCEPTED")]
    pub status: PostStatus,
    pub notification_method: Option<String>,
    pub gpa: Option<f64>,
    pub gpa_scale: f64,
    pub test_type: Option<String>,
    pub test_score: Option<i32>,
    #[schema(value_type = String, example = "DOMESTIC")]
    pub student_type: StudentType,
    #[schema(value_type = Option<String>, example = "NA")]
    pub continent: Option<Continent>,
    pub state: Option<String>,
    pub financial_aid: bool,
    pub scholarship: Option<String>,
    pub post_grad_plans: Option<String>,
    pub notes: Option<String>,
    pub notify_comments: bool,
    pub likes_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostListFilter {
    pub university: Option<String>,
    pub major: Option<String>,
    pub degree_type: Option<DegreeType>,
    pub year: Option<i32>,
    pub term: Option<Term>,
    pub status: Option<PostStatus>,
}

pub const DEFAULT_PER_PAGE: u32 = 20;
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    #[error("page must be at least 1")]
    InvalidPage,
    #[error("per_page must be between 1 and 100")]
    InvalidPerPage,
}

impl PageRequest {
    pub fn new(page: Option<u32>, per_page: Option<u32>) -> Result<Self, PageRequestError> {
        let page = page.unwrap_or(1);
        if page == 0 {
            return Err(PageRequestError::InvalidPage);
        }

        let per_page = per_page.unwrap_or(DEFAULT_PER_PAGE);
        if !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(PageRequestError::InvalidPerPage);
        }

        Ok(Self { page, per_page })
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Stored post is malformed: {0}")]
    MalformedRow(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, joins post_likes for counts)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<PostView>, PostQueryError>;

    /// Newest first.
    async fn list(
        &self,
        filter: PostListFilter,
        page: PageRequest,
    ) -> Result<PageResult<PostView>, PostQueryError>;
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn post_view(id: Uuid, owner: Option<Uuid>) -> PostView {
        let now = Utc::now();
        PostView {
            id,
            user_id: owner,
            degree_type: DegreeType::Ms,
            major: "Computer Science".to_string(),
            university: "Stanford University".to_string(),
            country: "USA".to_string(),
            year: 2025,
            term: Term::Fall,
            application_round: "Round 1".to_string(),
            status: PostStatus::Accepted,
            notification_method: None,
            gpa: Some(3.8),
            gpa_scale: 4.0,
            test_type: None,
            test_score: None,
            student_type: StudentType::International,
            continent: Some(Continent::Asia),
            state: None,
            financial_aid: false,
            scholarship: None,
            post_grad_plans: None,
            notes: None,
            notify_comments: false,
            likes_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}
