use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, UserRef};

/// A chapter groups pages inside a book.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Chapter {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub priority: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub owned_by: Option<UserRef>,
    pub tags: Vec<Tag>,
}

#[derive(Serialize, Debug, Clone, Default)]
pub struct ChapterCreateRequest {
    pub book_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Setting `book_id` moves the chapter to another book.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ChapterUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
