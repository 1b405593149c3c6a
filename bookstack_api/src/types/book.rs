//! Book types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, UserRef};

/// A BookStack book.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserRef>,
    pub updated_by: Option<UserRef>,
    pub owned_by: Option<UserRef>,
    pub tags: Vec<Tag>,
}

/// Fields for creating a book.
#[derive(Serialize, Debug, Clone, Default)]
pub struct BookCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Fields for updating a book. Unset fields are left unchanged.
#[derive(Serialize, Debug, Clone, Default)]
pub struct BookUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
