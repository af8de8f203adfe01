// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query strings and relative routes

use std::fmt;

use url::form_urlencoded;

/// Ordered query-string parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// An empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Page number, starting at 1 (v2)
    #[must_use]
    pub fn page(self, page: u32) -> Self {
        self.param("page", page)
    }

    /// Items per page
    #[must_use]
    pub fn limit(self, limit: u32) -> Self {
        self.param("limit", limit)
    }

    /// Items to skip (v1)
    #[must_use]
    pub fn offset(self, offset: u32) -> Self {
        self.param("offset", offset)
    }

    /// Sort order, for example `height:desc`
    #[must_use]
    pub fn order_by(self, order: impl Into<String>) -> Self {
        self.param("orderBy", order.into())
    }

    /// Whether no parameter was set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-urlencoded rendering, without the leading `?`
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

/// Percent-encode `segment` so that it stays a single path segment
///
/// `/`, `?`, `#` and `%` are escaped, so an identifier can neither leave its
/// segment nor add a query string or fragment.
pub fn encode_segment(segment: &str) -> String {
    // byte_serialize escapes every reserved byte but writes spaces as `+`, and a
    // literal `+` is always escaped, so the remaining `+` are spaces
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// A path relative to the API root plus its query string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    query: Query,
}

impl Route {
    /// A route without query parameters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Query::new(),
        }
    }

    /// Replace the query string
    #[must_use]
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Append a query parameter
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query = self.query.param(key, value);
        self
    }

    /// The path component
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            f.write_str(&self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query.encode())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_renders_bare_path() {
        assert_eq!(Route::new("blocks").to_string(), "blocks");
        assert!(Query::new().is_empty());
    }

    #[test]
    fn parameters_keep_insertion_order() {
        let query = Query::new().page(2).limit(50).order_by("height:desc");
        assert_eq!(query.encode(), "page=2&limit=50&orderBy=height%3Adesc");
    }

    #[test]
    fn values_are_encoded() {
        let route = Route::new("delegates/get").param("username", "ark pool&co");
        assert_eq!(route.to_string(), "delegates/get?username=ark+pool%26co");
    }

    #[test]
    fn segments_are_escaped() {
        assert_eq!(encode_segment("AJbm"), "AJbm");
        assert_eq!(encode_segment("a?b"), "a%3Fb");
        assert_eq!(encode_segment("AJ?limit=1#x"), "AJ%3Flimit%3D1%23x");
        assert_eq!(encode_segment("../blocks/9"), "..%2Fblocks%2F9");
        assert_eq!(encode_segment("a b+c%"), "a%20b%2Bc%25");
    }

    #[test]
    fn route_merges_query() {
        let route = Route::new("transactions")
            .with_query(Query::new().offset(100))
            .param("senderId", "AJ");
        assert_eq!(route.path(), "transactions");
        assert_eq!(route.to_string(), "transactions?offset=100&senderId=AJ");
    }
}
