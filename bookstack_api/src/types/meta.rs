use serde::{Deserialize, Serialize};

/// Envelope returned by list and search endpoints.
///
/// `total` counts every matching item on the server, not just this page.
/// A body without `data` does not decode.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: i64,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// A name/value tag attached to books, chapters, pages and shelves.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Reference to a user in `created_by`/`updated_by`/`owned_by` fields.
///
/// List endpoints send a bare id while single-item endpoints expand it to a
/// small user object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum UserRef {
    Id(i64),
    User(UserSummary),
}

impl UserRef {
    pub fn id(&self) -> i64 {
        match self {
            UserRef::Id(id) => *id,
            UserRef::User(user) => user.id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSummary {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
}
