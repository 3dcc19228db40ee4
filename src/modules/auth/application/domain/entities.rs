use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Public name shown for authors who have not picked an alias.
pub const ANONYMOUS_DISPLAY_NAME: &str = "Anonymous User";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Resolve the name shown next to posts and comments.
pub fn display_name(anonymous_username: Option<&str>) -> String {
    match anonymous_username.map(str::trim) {
        Some(alias) if !alias.is_empty() => alias.to_string(),
        _ => ANONYMOUS_DISPLAY_NAME.to_string(),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub anonymous_username: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn display_name(&self) -> String {
        display_name(self.anonymous_username.as_deref())
    }
}
