//! Templated URIs with `{placeholder}` substitution.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN};
use crate::error::UriError;
use crate::uri::{Uri, UriParts};

/// Placeholder name → replacement value.
pub type Parameters = BTreeMap<String, String>;

/// A [`Uri`] whose rendered string contains `{name}` placeholders.
///
/// Placeholders are filled from two maps: `defaults`, fixed at
/// construction, and an overlay of `parameters` that wins on key
/// collisions. Tokens with no matching key are left untouched.
///
/// Rendering can use the stored overlay ([`render`](Self::render), set via
/// [`set_parameters`](Self::set_parameters)) or an explicit one
/// ([`render_with`](Self::render_with)), which leaves the value untouched
/// and is what shared callers should use.
///
/// # Examples
///
/// ```
/// use external_uri::{DynamicUri, Parameters, UriParts};
///
/// let defaults = Parameters::from([
///     ("test".to_string(), "value".to_string()),
///     ("other".to_string(), "test".to_string()),
/// ]);
/// let mut uri = DynamicUri::new(
///     UriParts::new("www.example.com", "http", "/is_{test}/and-{other}"),
///     defaults,
/// )
/// .unwrap();
/// assert_eq!(uri.render(), "http://www.example.com/is_value/and-test");
///
/// uri.set_parameters(Parameters::from([("test".to_string(), "other".to_string())]));
/// assert_eq!(uri.render(), "http://www.example.com/is_other/and-test");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicUri {
    uri: Uri,
    #[cfg_attr(feature = "serde", serde(default))]
    defaults: Parameters,
    #[cfg_attr(feature = "serde", serde(default))]
    parameters: Parameters,
}

impl DynamicUri {
    /// Creates a templated URI from its components and placeholder defaults.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if any component fails validation (see [`Uri::new`]).
    pub fn new(parts: UriParts, defaults: Parameters) -> Result<Self, UriError> {
        Ok(Self::from_uri(Uri::new(parts)?, defaults))
    }

    /// Wraps an already validated URI.
    #[must_use]
    pub const fn from_uri(uri: Uri, defaults: Parameters) -> Self {
        Self {
            uri,
            defaults,
            parameters: Parameters::new(),
        }
    }

    /// Returns the underlying URI, placeholders unsubstituted.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Consumes the template and returns the underlying URI.
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.uri
    }

    /// Returns the placeholder defaults.
    #[must_use]
    pub const fn defaults(&self) -> &Parameters {
        &self.defaults
    }

    /// Returns the stored parameter overlay.
    #[must_use]
    pub const fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Replaces the stored parameter overlay. Previous parameters are
    /// discarded, not merged.
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.parameters = parameters;
    }

    /// Renders with the stored parameter overlay.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&self.parameters)
    }

    /// Renders with `parameters` as the overlay, ignoring the stored one.
    ///
    /// # Examples
    ///
    /// ```
    /// use external_uri::{DynamicUri, Parameters, UriParts};
    ///
    /// let uri = DynamicUri::new(
    ///     UriParts::new("www.example.com", "http", "/is_{0}/and-{1}"),
    ///     Parameters::from([
    ///         ("0".to_string(), "value".to_string()),
    ///         ("1".to_string(), "test".to_string()),
    ///     ]),
    /// )
    /// .unwrap();
    ///
    /// let overlay = Parameters::from([("0".to_string(), "other".to_string())]);
    /// assert_eq!(uri.render_with(&overlay), "http://www.example.com/is_other/and-test");
    /// assert!(uri.parameters().is_empty());
    /// ```
    #[must_use]
    pub fn render_with(&self, parameters: &Parameters) -> String {
        let mut merged: BTreeMap<&str, &str> = self
            .defaults
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        merged.extend(parameters.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        substitute(&self.uri.to_string(), &merged)
    }

    /// Returns the distinct `{name}` placeholders of the template, in order
    /// of first appearance.
    #[must_use]
    pub fn placeholders(&self) -> Vec<String> {
        let rendered = self.uri.to_string();
        let mut names: Vec<String> = Vec::new();
        let mut rest = rendered.as_str();

        while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
            rest = &rest[open + 1..];
            let Some(close) = rest.find(PLACEHOLDER_CLOSE) else {
                break;
            };
            let name = &rest[..close];
            if name.is_empty() || name.contains(PLACEHOLDER_OPEN) {
                continue;
            }
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
            rest = &rest[close + 1..];
        }

        names
    }

    /// Returns a new template with the given scheme.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_scheme`].
    pub fn with_scheme(&self, scheme: &str) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_scheme(scheme))
    }

    /// Returns a new template with the given user information.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_user_info`].
    pub fn with_user_info(&self, user: &str, password: Option<&str>) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_user_info(user, password))
    }

    /// Returns a new template with the given host.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_host`].
    pub fn with_host(&self, host: &str) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_host(host))
    }

    /// Returns a new template with the given port.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_port`].
    pub fn with_port(&self, port: Option<u16>) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_port(port))
    }

    /// Returns a new template with the given path.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_path`].
    pub fn with_path(&self, path: &str) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_path(path))
    }

    /// Returns a new template with the given query.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_query`].
    pub fn with_query(&self, query: &str) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_query(query))
    }

    /// Returns a new template with the given fragment.
    ///
    /// # Errors
    ///
    /// See [`Uri::with_fragment`].
    pub fn with_fragment(&self, fragment: &str) -> Result<Self, UriError> {
        self.map_uri(|uri| uri.with_fragment(fragment))
    }

    fn map_uri(
        &self,
        change: impl FnOnce(&Uri) -> Result<Uri, UriError>,
    ) -> Result<Self, UriError> {
        Ok(Self {
            uri: change(&self.uri)?,
            defaults: self.defaults.clone(),
            parameters: self.parameters.clone(),
        })
    }
}

/// Replaces every `{key}` token of `template` in a single left-to-right
/// pass. At each position the longest matching token wins; replaced text is
/// never scanned again.
fn substitute(template: &str, values: &BTreeMap<&str, &str>) -> String {
    if values.is_empty() {
        return template.to_string();
    }

    let mut tokens: Vec<(String, &str)> = values
        .iter()
        .map(|(k, v)| (format!("{PLACEHOLDER_OPEN}{k}{PLACEHOLDER_CLOSE}"), *v))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find(PLACEHOLDER_OPEN) {
        output.push_str(&rest[..open]);
        rest = &rest[open..];

        match tokens.iter().find(|(token, _)| rest.starts_with(token.as_str())) {
            Some((token, value)) => {
                output.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                output.push(PLACEHOLDER_OPEN);
                rest = &rest[PLACEHOLDER_OPEN.len_utf8()..];
            }
        }
    }

    output.push_str(rest);
    output
}

impl fmt::Display for DynamicUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Uri> for DynamicUri {
    fn from(uri: Uri) -> Self {
        Self::from_uri(uri, Parameters::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn template(path: &str, defaults: &[(&str, &str)]) -> DynamicUri {
        DynamicUri::new(
            UriParts::new("www.example.com", "http", path),
            params(defaults),
        )
        .unwrap()
    }

    #[test]
    fn can_replace_values() {
        let uri = template("/is_{test}", &[("test", "value")]);
        assert_eq!(uri.to_string(), "http://www.example.com/is_value");
    }

    #[test]
    fn can_override_values() {
        let mut uri = template("/is_{test}/and-{other}", &[("test", "value"), ("other", "test")]);
        uri.set_parameters(params(&[("test", "other")]));
        assert_eq!(uri.to_string(), "http://www.example.com/is_other/and-test");
    }

    #[test]
    fn can_override_with_integer_keys() {
        let mut uri = template("/is_{0}/and-{1}", &[("0", "value"), ("1", "test")]);
        uri.set_parameters(params(&[("0", "other")]));
        assert_eq!(uri.to_string(), "http://www.example.com/is_other/and-test");
    }

    #[test]
    fn set_parameters_replaces_previous_overlay() {
        let mut uri = template("/{a}/{b}", &[]);
        uri.set_parameters(params(&[("a", "1"), ("b", "2")]));
        uri.set_parameters(params(&[("a", "3")]));
        assert_eq!(uri.render(), "http://www.example.com/3/{b}");
    }

    #[test]
    fn unknown_tokens_are_left_untouched() {
        let uri = template("/{known}/{unknown}", &[("known", "k")]);
        assert_eq!(uri.render(), "http://www.example.com/k/{unknown}");
    }

    #[test]
    fn keys_are_case_sensitive() {
        let uri = template("/{Name}", &[("name", "x")]);
        assert_eq!(uri.render(), "http://www.example.com/{Name}");
    }

    #[test]
    fn replaced_values_are_not_rescanned() {
        let uri = template("/{a}/{b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(uri.render(), "http://www.example.com/{b}/x");
    }

    #[test]
    fn placeholders_in_query_and_fragment() {
        let uri = DynamicUri::new(
            UriParts {
                query: "page={page}".to_string(),
                fragment: "{anchor}".to_string(),
                ..UriParts::new("www.example.com", "https", "/search")
            },
            params(&[("page", "1"), ("anchor", "results")]),
        )
        .unwrap();
        assert_eq!(uri.render(), "https://www.example.com/search?page=1#results");
    }

    #[test]
    fn render_with_does_not_touch_stored_overlay() {
        let mut uri = template("/{a}", &[("a", "default")]);
        uri.set_parameters(params(&[("a", "stored")]));

        assert_eq!(
            uri.render_with(&params(&[("a", "given")])),
            "http://www.example.com/given"
        );
        assert_eq!(
            uri.render_with(&Parameters::new()),
            "http://www.example.com/default"
        );
        assert_eq!(uri.render(), "http://www.example.com/stored");
    }

    #[test]
    fn nested_braces_match_innermost_token() {
        let uri = template("/{{a}}", &[("a", "x")]);
        assert_eq!(uri.render(), "http://www.example.com/{x}");
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        let uri = template("/{b}/{a}/{b}/{}", &[]);
        assert_eq!(uri.placeholders(), vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn with_methods_keep_defaults_and_overlay() {
        let mut uri = template("/{a}", &[("a", "1")]);
        uri.set_parameters(params(&[("a", "2")]));

        let moved = uri.with_host("www.other.com").unwrap();
        assert_eq!(moved.defaults(), uri.defaults());
        assert_eq!(moved.parameters(), uri.parameters());
        assert_eq!(moved.render(), "http://www.other.com/2");

        let secured = uri.with_scheme("https").unwrap();
        assert_eq!(secured.render(), "https://www.example.com/2");
    }

    #[test]
    fn with_methods_propagate_errors() {
        let uri = template("/{a}", &[]);
        assert!(matches!(
            uri.with_scheme("ftp"),
            Err(UriError::InvalidScheme { .. })
        ));
        assert!(matches!(
            uri.with_path("relative"),
            Err(UriError::InvalidPath { .. })
        ));
    }

    #[test]
    fn from_uri_has_no_defaults() {
        let uri = Uri::new(UriParts::new("www.example.com", "", "/{x}")).unwrap();
        let dynamic = DynamicUri::from(uri.clone());
        assert!(dynamic.defaults().is_empty());
        assert_eq!(dynamic.render(), uri.to_string());
        assert_eq!(dynamic.into_uri(), uri);
    }
}
