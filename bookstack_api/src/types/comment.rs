use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRef;

/// A comment on a page. Replies carry the `local_id` of their parent in `parent_id`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    pub page_id: i64,
    pub html: String,
    pub parent_id: Option<i64>,
    pub local_id: i64,
    pub archived: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct CommentCreateRequest {
    pub page_id: i64,
    pub html: String,
    /// `local_id` of the comment being replied to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<i64>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct CommentUpdateRequest {
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}
