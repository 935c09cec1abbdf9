//! Named, ordered registry of URIs.

use std::fmt;

use indexmap::IndexMap;

use crate::dynamic_uri::{DynamicUri, Parameters};
use crate::error::UriError;
use crate::uri::Uri;

/// A URI stored in a [`UriCollection`]: either a plain [`Uri`] or a
/// [`DynamicUri`] template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Entry {
    /// A plain URI
    Static(Uri),
    /// A templated URI
    Dynamic(DynamicUri),
}

impl Entry {
    /// Returns the underlying URI (placeholders unsubstituted).
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        match self {
            Self::Static(uri) => uri,
            Self::Dynamic(dynamic) => dynamic.uri(),
        }
    }

    /// Returns the template, if this entry is dynamic.
    #[must_use]
    pub const fn as_dynamic(&self) -> Option<&DynamicUri> {
        match self {
            Self::Static(_) => None,
            Self::Dynamic(dynamic) => Some(dynamic),
        }
    }

    /// Returns true if this entry is a template.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// Returns a new entry of the same kind with the given host.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidHost` for invalid hosts.
    pub fn with_host(&self, host: &str) -> Result<Self, UriError> {
        match self {
            Self::Static(uri) => uri.with_host(host).map(Self::Static),
            Self::Dynamic(dynamic) => dynamic.with_host(host).map(Self::Dynamic),
        }
    }

    /// Returns a new entry of the same kind with the given scheme.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidScheme` for unsupported schemes.
    pub fn with_scheme(&self, scheme: &str) -> Result<Self, UriError> {
        match self {
            Self::Static(uri) => uri.with_scheme(scheme).map(Self::Static),
            Self::Dynamic(dynamic) => dynamic.with_scheme(scheme).map(Self::Dynamic),
        }
    }

    /// Renders the entry. Templates use their stored parameter overlay.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Static(uri) => uri.to_string(),
            Self::Dynamic(dynamic) => dynamic.render(),
        }
    }

    /// Renders the entry with an explicit parameter overlay. Plain URIs
    /// ignore the parameters.
    #[must_use]
    pub fn render_with(&self, parameters: &Parameters) -> String {
        match self {
            Self::Static(uri) => uri.to_string(),
            Self::Dynamic(dynamic) => dynamic.render_with(parameters),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<Uri> for Entry {
    fn from(uri: Uri) -> Self {
        Self::Static(uri)
    }
}

impl From<DynamicUri> for Entry {
    fn from(dynamic: DynamicUri) -> Self {
        Self::Dynamic(dynamic)
    }
}

/// An ordered set of named URIs.
///
/// Adding a URI under an existing name removes the old entry first, so the
/// new one ends up at the end of the iteration order and there is only ever
/// one URI per name.
///
/// # Examples
///
/// ```
/// use external_uri::{Uri, UriCollection, UriParts};
///
/// let mut uris = UriCollection::new();
/// uris.add("a", Uri::new(UriParts::new("a.example.com", "http", "")).unwrap());
/// uris.add("b", Uri::new(UriParts::new("b.example.com", "http", "")).unwrap());
/// uris.add("a", Uri::new(UriParts::new("c.example.com", "http", "")).unwrap());
///
/// assert_eq!(uris.names().collect::<Vec<_>>(), ["b", "a"]);
///
/// uris.set_scheme("https").unwrap();
/// assert_eq!(uris.get("a").unwrap().to_string(), "https://c.example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UriCollection {
    uris: IndexMap<String, Entry>,
    resources: Vec<String>,
}

impl UriCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a URI under `name`, moving it to the end if the name exists.
    pub fn add(&mut self, name: impl Into<String>, uri: impl Into<Entry>) {
        let name = name.into();
        if self.uris.shift_remove(&name).is_some() {
            tracing::trace!(name = %name, "replacing existing URI");
        }
        self.uris.insert(name, uri.into());
    }

    /// Returns the URI registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.uris.get(name)
    }

    /// Returns the URI registered under `name` for in-place updates such as
    /// [`DynamicUri::set_parameters`].
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Entry> {
        self.uris.get_mut(name)
    }

    /// Returns true if a URI is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.uris.contains_key(name)
    }

    /// Removes the URI registered under `name`, preserving the order of the
    /// others. Missing names are ignored.
    pub fn remove(&mut self, name: &str) -> Option<Entry> {
        self.uris.shift_remove(name)
    }

    /// Removes every listed name. Missing names are ignored.
    pub fn remove_all<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.uris.shift_remove(name.as_ref());
        }
    }

    /// Returns all URIs in order.
    #[must_use]
    pub const fn all(&self) -> &IndexMap<String, Entry> {
        &self.uris
    }

    /// Returns the number of URIs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.uris.len()
    }

    /// Returns true if the collection holds no URI.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.uris.is_empty()
    }

    /// Returns an iterator over `(name, uri)` in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Entry> {
        self.uris.iter()
    }

    /// Returns an iterator over the names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.uris.keys().map(String::as_str)
    }

    /// Appends every URI of `other` in its order, replacing (and moving to
    /// the end) those with the same name, then appends its resources.
    pub fn add_collection(&mut self, other: Self) {
        let Self { uris, resources } = other;
        for (name, uri) in uris {
            self.add(name, uri);
        }
        self.resources.extend(resources);
    }

    /// Records an opaque resource (e.g. the source a collection was loaded
    /// from).
    pub fn add_resource(&mut self, resource: impl Into<String>) {
        self.resources.push(resource.into());
    }

    /// Returns the recorded resources.
    #[must_use]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    /// Sets the host of every URI, keeping names and order.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidHost` if the host is invalid; the collection
    /// is left unchanged.
    pub fn set_host(&mut self, host: &str) -> Result<(), UriError> {
        tracing::trace!(host, count = self.uris.len(), "rewriting host");
        self.rewrite(|uri| uri.with_host(host))
    }

    /// Sets the scheme of every URI, keeping names and order.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidScheme` if the scheme is unsupported; the
    /// collection is left unchanged.
    pub fn set_scheme(&mut self, scheme: &str) -> Result<(), UriError> {
        tracing::trace!(scheme, count = self.uris.len(), "rewriting scheme");
        self.rewrite(|uri| uri.with_scheme(scheme))
    }

    fn rewrite(&mut self, change: impl Fn(&Entry) -> Result<Entry, UriError>) -> Result<(), UriError> {
        let updated = self
            .uris
            .values()
            .map(&change)
            .collect::<Result<Vec<_>, _>>()?;

        for (slot, uri) in self.uris.values_mut().zip(updated) {
            *slot = uri;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a UriCollection {
    type Item = (&'a String, &'a Entry);
    type IntoIter = indexmap::map::Iter<'a, String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.uris.iter()
    }
}

impl IntoIterator for UriCollection {
    type Item = (String, Entry);
    type IntoIter = indexmap::map::IntoIter<String, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.uris.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for UriCollection
where
    K: Into<String>,
    V: Into<Entry>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut collection = Self::new();
        collection.extend(iter);
        collection
    }
}

impl<K, V> Extend<(K, V)> for UriCollection
where
    K: Into<String>,
    V: Into<Entry>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, uri) in iter {
            self.add(name, uri);
        }
    }
}
