//! Shared query infrastructure: the [`Query`] trait and [`SortDirection`].

use std::str::FromStr;

use url::form_urlencoded::Serializer;

/// Trait implemented by all query builders. Renders the builder's parameters
/// as a query string that can be appended to a request path.
pub trait Query {
    /// Appends this query's parameters to the serializer.
    fn append_pairs(&self, pairs: &mut Serializer<'_, String>);

    /// Returns the encoded parameters prefixed with `?`, or an empty string
    /// when there is nothing to send.
    fn query_string(&self) -> String {
        let mut pairs = Serializer::new(String::new());
        self.append_pairs(&mut pairs);
        let encoded = pairs.finish();
        if encoded.is_empty() {
            encoded
        } else {
            format!("?{}", encoded)
        }
    }
}

/// Sort order for list results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. This is the default.
    #[default]
    Asc,
    /// Descending order, sent as a `-` prefix on the sort field.
    Desc,
}

impl SortDirection {
    pub(crate) fn prefix(self) -> &'static str {
        match self {
            SortDirection::Asc => "",
            SortDirection::Desc => "-",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

/// Appends `count` and `offset` when they are positive. Zero or negative
/// values mean "use the server default" and are left out.
pub(crate) fn append_window(pairs: &mut Serializer<'_, String>, count: i64, offset: i64) {
    if count > 0 {
        pairs.append_pair("count", &count.to_string());
    }
    if offset > 0 {
        pairs.append_pair("offset", &offset.to_string());
    }
}
