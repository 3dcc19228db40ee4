use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// `Mar 05, 2025 14:07`, always UTC.
pub const COMMENT_DATE_FORMAT: &str = "%b %d, %Y %H:%M";

pub fn format_comment_date(at: DateTime<Utc>) -> String {
    at.format(COMMENT_DATE_FORMAT).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentContentError {
    #[error("Comment content cannot be empty")]
    Empty,
}

/// Non-blank comment text, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentContent(String);

impl CommentContent {
    pub fn parse(raw: &str) -> Result<Self, CommentContentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CommentContentError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A stored comment row together with its author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentRecord {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl CommentRecord {
    pub fn is_reply(&self) -> bool {
        self.parent_id.is_some()
    }
}

/// A reply as shown under its parent.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReplyView {
    pub id: Uuid,
    #[schema(example = "gradhopeful")]
    pub user: String,
    pub content: String,
    #[schema(example = "Mar 05, 2025 14:07")]
    pub created_at: String,
}

/// A top-level comment with its direct replies, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CommentThread {
    pub id: Uuid,
    #[schema(example = "gradhopeful")]
    pub user: String,
    pub content: String,
    #[schema(example = "Mar 05, 2025 14:07")]
    pub created_at: String,
    pub replies: Vec<ReplyView>,
}

impl From<&CommentRecord> for ReplyView {
    fn from(record: &CommentRecord) -> Self {
        Self {
            id: record.id,
            user: record.author.clone(),
            content: record.content.clone(),
            created_at: format_comment_date(record.created_at),
        }
    }
}

/// Arrange a post's comment rows into a two-level tree.
///
/// Top-level comments and each reply list are ordered by `created_at`, then id.
/// A row whose parent is not a top-level comment in `records` is left out, so
/// replies to replies never surface.
pub fn build_threads(mut records: Vec<CommentRecord>) -> Vec<CommentThread> {
    records.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

    let mut threads: Vec<CommentThread> = Vec::new();
    let mut position: HashMap<Uuid, usize> = HashMap::new();

    for record in records.iter().filter(|r| !r.is_reply()) {
        position.insert(record.id, threads.len());
        threads.push(CommentThread {
            id: record.id,
            user: record.author.clone(),
            content: record.content.clone(),
            created_at: format_comment_date(record.created_at),
            replies: Vec::new(),
        });
    }

    for record in records.iter() {
        let Some(parent_id) = record.parent_id else {
            continue;
        };
        if let Some(&index) = position.get(&parent_id) {
            threads[index].replies.push(ReplyView::from(record));
        }
    }

    threads
}
