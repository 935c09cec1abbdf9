//! Fluent builder for [`Uri`] and [`DynamicUri`] instances.
//!
//! Every component is optional, so unlike a typestate builder the setters
//! can be called in any order. Validation happens once, in `build()`.

use crate::dynamic_uri::{DynamicUri, Parameters};
use crate::error::UriError;
use crate::uri::{Uri, UriParts};

/// A builder for constructing [`Uri`] and [`DynamicUri`] instances.
///
/// If a setter is called multiple times, the last value wins.
///
/// # Examples
///
/// ```
/// use external_uri::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .scheme("https")
///     .host("api.example.com")
///     .port(Some(88))
///     .path("/v1/users")
///     .query("page=2")
///     .build()
///     .unwrap();
///
/// assert_eq!(uri.to_string(), "https://api.example.com:88/v1/users?page=2");
/// ```
///
/// Placeholder defaults turn the result into a [`DynamicUri`]:
///
/// ```
/// use external_uri::UriBuilder;
///
/// let uri = UriBuilder::new()
///     .scheme("http")
///     .host("www.example.com")
///     .path("/is_{test}")
///     .default_param("test", "value")
///     .build_dynamic()
///     .unwrap();
///
/// assert_eq!(uri.render(), "http://www.example.com/is_value");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriBuilder {
    parts: UriParts,
    defaults: Parameters,
}

impl UriBuilder {
    /// Creates a new builder with every component empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled with the components of `uri`.
    #[must_use]
    pub fn from_uri(uri: &Uri) -> Self {
        Self {
            parts: uri.to_parts(),
            defaults: Parameters::new(),
        }
    }

    /// Sets the scheme (`""`, `"http"` or `"https"`).
    #[must_use]
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.parts.scheme = scheme.into();
        self
    }

    /// Sets the host.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.parts.host = host.into();
        self
    }

    /// Sets the explicit port; `None` removes it.
    #[must_use]
    pub fn port(mut self, port: Option<u16>) -> Self {
        self.parts.port = port;
        self
    }

    /// Sets the path.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.parts.path = path.into();
        self
    }

    /// Sets the query string (leading `?` are stripped on build).
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.parts.query = query.into();
        self
    }

    /// Sets the fragment (leading `#` are stripped on build).
    #[must_use]
    pub fn fragment(mut self, fragment: impl Into<String>) -> Self {
        self.parts.fragment = fragment.into();
        self
    }

    /// Sets the user name and optional password.
    #[must_use]
    pub fn user_info(mut self, user: impl Into<String>, password: Option<String>) -> Self {
        self.parts.user = user.into();
        self.parts.password = password;
        self
    }

    /// Adds a placeholder default used by [`build_dynamic`](Self::build_dynamic).
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Replaces all placeholder defaults.
    #[must_use]
    pub fn defaults(mut self, defaults: Parameters) -> Self {
        self.defaults = defaults;
        self
    }

    /// Builds the final [`Uri`]. Placeholder defaults are ignored.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if any component fails validation.
    pub fn build(self) -> Result<Uri, UriError> {
        Uri::new(self.parts)
    }

    /// Builds a [`DynamicUri`] carrying the placeholder defaults.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if any component fails validation.
    pub fn build_dynamic(self) -> Result<DynamicUri, UriError> {
        DynamicUri::new(self.parts, self.defaults)
    }
}
