use std::collections::BTreeMap;

use url::form_urlencoded::Serializer;

use super::{
    common::{append_window, SortDirection},
    Query,
};

/// Options for single-page list calls.
///
/// Filters are kept in a sorted map so the rendered query string is stable.
#[derive(Clone, Debug, Default)]
pub struct ListOptions {
    /// Maximum items per page. Zero or negative uses the server default (100, max 500).
    pub count: i64,
    /// Number of items to skip. Zero or negative starts at the beginning.
    pub offset: i64,
    /// Sort field, optionally prefixed with `-` for descending order.
    pub sort: Option<String>,
    /// Field filters, sent as `filter[<key>]=<value>`.
    pub filters: BTreeMap<String, String>,
}

impl Query for ListOptions {
    fn append_pairs(&self, pairs: &mut Serializer<'_, String>) {
        append_window(pairs, self.count, self.offset);
        if let Some(sort) = self.sort.as_deref().filter(|s| !s.is_empty()) {
            pairs.append_pair("sort", sort);
        }
        for (key, value) in &self.filters {
            pairs.append_pair(&format!("filter[{}]", key), value);
        }
    }
}

impl ListOptions {
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sorts by `field` in the given direction.
    pub fn with_sort(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = Some(format!("{}{}", direction.prefix(), field));
        self
    }

    /// Adds a `filter[key]=value` parameter. A repeated key replaces the earlier value.
    pub fn with_filter(mut self, key: &str, value: impl ToString) -> Self {
        self.filters.insert(key.to_string(), value.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_options_render_nothing() {
        assert_eq!(ListOptions::default().query_string(), "");
    }

    #[test]
    fn window_and_sort() {
        let qs = ListOptions::default()
            .with_count(10)
            .with_offset(20)
            .with_sort("name", SortDirection::Desc)
            .query_string();
        insta::assert_snapshot!(qs, @"?count=10&offset=20&sort=-name");
    }

    #[test]
    fn non_positive_window_is_omitted() {
        let qs = ListOptions::default()
            .with_count(0)
            .with_offset(-5)
            .with_sort("created_at", SortDirection::Asc)
            .query_string();
        assert_eq!(qs, "?sort=created_at");
    }

    #[test]
    fn filters_are_encoded() {
        let qs = ListOptions::default()
            .with_filter("name", "My Book")
            .with_filter("book_id", 3)
            .query_string();
        insta::assert_snapshot!(qs, @"?filter%5Bbook_id%5D=3&filter%5Bname%5D=My+Book");
    }

    #[test]
    fn empty_sort_is_omitted() {
        let opts = ListOptions {
            sort: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(opts.query_string(), "");
    }
}
