use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Tag, UserRef};

/// A shelf (bookshelf) holding an ordered set of books.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Shelf {
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

#[derive(Serialize, Debug, Clone, Default)]
pub struct ShelfCreateRequest {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Book ids in shelf order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// `books`, when set, replaces the shelf's book list.
#[derive(Serialize, Debug, Clone, Default)]
pub struct ShelfUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}
