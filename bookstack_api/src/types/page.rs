//! Page types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, UserRef};

/// A BookStack page. `chapter_id` is zero for pages placed directly in a book.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Page {
    pub id: i64,
    pub book_id: i64,
    pub chapter_id: i64,
    pub name: String,
    pub slug: String,
    pub html: String,
    pub markdown: String,
    pub priority: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub owned_by: Option<UserRef>,
    pub draft: bool,
    #[serde(rename = "revision_count")]
    pub revision: i64,
    pub template: bool,
    pub tags: Vec<Tag>,
}

/// Fields for creating a page. Either `book_id` or `chapter_id` places the
/// page; content goes in `html` or `markdown`.
#[derive(Serialize, Debug, Clone, Default)]
pub struct PageCreateRequest {
    pub book_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<i64>,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub markdown: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct PageUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
