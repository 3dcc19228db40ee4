use serde::Serialize;
use utoipa::ToSchema;

/// State of a (user, post) like after a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct LikeOutcome {
    #[schema(example = 12)]
    pub likes_count: u64,
    pub liked: bool,
}
