//! Configuration for the external URI generator.

use indexmap::IndexMap;

use crate::uri::UriParts;

/// One configured external URI: host, scheme and (template) path.
///
/// With the `serde` feature this deserialises from a record with the keys
/// `host`, `scheme` and `path`; `scheme` and `path` default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UriConfig {
    /// Host of the service
    pub host: String,
    /// Scheme (`""`, `"http"` or `"https"`)
    #[cfg_attr(feature = "serde", serde(default))]
    pub scheme: String,
    /// Path, possibly with `{placeholder}` tokens
    #[cfg_attr(feature = "serde", serde(default))]
    pub path: String,
}

impl UriConfig {
    /// Creates a configuration record.
    #[must_use]
    pub fn new(
        host: impl Into<String>,
        scheme: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            scheme: scheme.into(),
            path: path.into(),
        }
    }

    /// Sets the host.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the scheme.
    #[must_use]
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Returns the URI components described by this record.
    #[must_use]
    pub fn to_parts(&self) -> UriParts {
        UriParts::new(self.host.clone(), self.scheme.clone(), self.path.clone())
    }
}

/// Ordered mapping of names to [`UriConfig`] records.
///
/// Iteration follows insertion order, which is also the order in which the
/// generator registers its URIs.
///
/// # Examples
///
/// ```
/// use external_uri::{GeneratorConfig, UriConfig};
///
/// let config = GeneratorConfig::new()
///     .with_uri("search", UriConfig::new("www.example.com", "https", "/search/{term}"))
///     .with_uri("home", UriConfig::new("www.example.com", "https", ""));
///
/// assert_eq!(config.len(), 2);
/// assert_eq!(config.names().collect::<Vec<_>>(), ["search", "home"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GeneratorConfig {
    uris: IndexMap<String, UriConfig>,
}

impl GeneratorConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record, replacing any previous one with the same name.
    #[must_use]
    pub fn with_uri(mut self, name: impl Into<String>, uri: UriConfig) -> Self {
        self.insert(name, uri);
        self
    }

    /// Inserts a record, returning the one it replaced.
    ///
    /// A replaced record keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, uri: UriConfig) -> Option<UriConfig> {
        self.uris.insert(name.into(), uri)
    }

    /// Returns the record configured under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&UriConfig> {
        self.uris.get(name)
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Returns true if nothing is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Returns the configured names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.uris.keys().map(String::as_str)
    }

    /// Returns an iterator over `(name, record)` in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UriConfig)> {
        self.uris.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, UriConfig)> for GeneratorConfig {
    fn from_iter<T: IntoIterator<Item = (K, UriConfig)>>(iter: T) -> Self {
        Self {
            uris: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl IntoIterator for GeneratorConfig {
    type Item = (String, UriConfig);
    type IntoIter = indexmap::map::IntoIter<String, UriConfig>;

    fn into_iter(self) -> Self::IntoIter {
        self.uris.into_iter()
    }
}
