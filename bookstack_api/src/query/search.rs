use url::form_urlencoded::Serializer;

use super::{common::append_window, Query};

/// Parameters for the `/api/search` endpoint. Search supports paging but not
/// sorting or filtering.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    pub query: String,
    pub count: i64,
    pub offset: i64,
}

impl Query for SearchQuery {
    fn append_pairs(&self, pairs: &mut Serializer<'_, String>) {
        pairs.append_pair("query", &self.query);
        append_window(pairs, self.count, self.offset);
    }
}

impl SearchQuery {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            count: 0,
            offset: 0,
        }
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }
}
