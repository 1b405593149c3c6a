use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of entity a search hit refers to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultType {
    #[default]
    Page,
    Chapter,
    Book,
    #[serde(alias = "shelf")]
    Bookshelf,
    #[serde(other)]
    Other,
}

impl fmt::Display for SearchResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SearchResultType::Page => "page",
            SearchResultType::Chapter => "chapter",
            SearchResultType::Book => "book",
            SearchResultType::Bookshelf => "shelf",
            SearchResultType::Other => "other",
        };
        f.write_str(s)
    }
}

/// A single search hit. `book_id` is set for pages and chapters, `chapter_id`
/// for pages inside a chapter.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchResultType,
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub book_id: i64,
    pub chapter_id: i64,
    pub preview: String,
    pub score: f64,
}
