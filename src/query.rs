//! Query string parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;
use crate::path::{self, Invalid};

/// Parsed view of a query string.
///
/// Pairs keep their original order and raw (still percent-encoded) form so
/// that the query renders back exactly as it was given. Duplicate keys are
/// kept; [`get`](Self::get) returns the last one.
///
/// # Examples
///
/// ```
/// use external_uri::QueryParams;
///
/// let params = QueryParams::parse("foo=bar&flag&test=other").unwrap();
/// assert_eq!(params.get("foo"), Some("bar"));
/// assert_eq!(params.get("flag"), Some(""));
/// assert_eq!(params.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty query params instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses query parameters from a query string (without leading '?').
    ///
    /// Empty pairs (`a=1&&b=2`) are skipped. A pair without `=` is a key
    /// with an empty value.
    ///
    /// # Errors
    ///
    /// Returns `QueryError` if the string contains characters that must be
    /// percent-encoded, a malformed `%` escape, or a pair with an empty key.
    pub fn parse(input: &str) -> Result<Self, QueryError> {
        if input.is_empty() {
            return Ok(Self::new());
        }

        path::scan(input, Self::is_valid_char).map_err(|invalid| match invalid {
            Invalid::Char(char, position) => QueryError::InvalidChar { char, position },
            Invalid::PercentEncoding(position) => QueryError::InvalidPercentEncoding { position },
        })?;

        let mut pairs = Vec::new();

        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));

            if key.is_empty() {
                return Err(QueryError::EmptyKey {
                    pair: pair.to_string(),
                });
            }

            pairs.push((key.to_string(), value.to_string()));
        }

        Ok(Self { pairs })
    }

    /// Returns the value of the last pair with the given key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if a pair with the given key exists.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Returns true if the query is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns an iterator over the pairs in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if the character may appear unencoded in a query.
    #[must_use]
    pub const fn is_valid_char(c: char) -> bool {
        path::is_path_char(c) || c == '?'
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            if v.is_empty() {
                f.write_str(k)?;
            } else {
                write!(f, "{k}={v}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for QueryParams {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
