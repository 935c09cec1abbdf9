//! Named external URI generation.

use crate::collection::UriCollection;
use crate::config::GeneratorConfig;
use crate::dynamic_uri::{DynamicUri, Parameters};
use crate::error::GeneratorError;

/// Builds URIs to external services from a named configuration.
///
/// Each configured record becomes a [`DynamicUri`] registered under its
/// name. [`generate`](Self::generate) renders one of them with runtime
/// parameters filling its `{placeholder}` tokens.
///
/// Rendering never mutates the generator, so a single instance can be
/// shared between threads without locking.
///
/// # Examples
///
/// ```
/// use external_uri::{ExternalUriGenerator, GeneratorConfig, Parameters, UriConfig};
///
/// let config = GeneratorConfig::new()
///     .with_uri("profile", UriConfig::new("social.example.com", "https", "/users/{id}"));
/// let generator = ExternalUriGenerator::new(config).unwrap();
///
/// let params = Parameters::from([("id".to_string(), "42".to_string())]);
/// assert_eq!(
///     generator.generate("profile", &params).unwrap(),
///     "https://social.example.com/users/42"
/// );
/// assert!(generator.generate("unknown", &params).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExternalUriGenerator {
    uris: UriCollection,
}

impl ExternalUriGenerator {
    /// Creates a generator with one templated URI per configured record,
    /// registered in configuration order.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::InvalidUri` naming the first record whose
    /// host, scheme or path fails validation.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        tracing::debug!(count = config.len(), "building external URI generator");

        let mut uris = UriCollection::new();
        for (name, record) in config {
            let uri = DynamicUri::new(record.to_parts(), Parameters::new())
                .map_err(|source| GeneratorError::invalid_uri(name.as_str(), source))?;
            tracing::debug!(name = %name, uri = %uri.uri(), "registered external URI");
            uris.add(name, uri);
        }

        Ok(Self { uris })
    }

    /// Renders the URI registered under `name` with `parameters` overriding
    /// its placeholder defaults.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::UnknownUriName` if nothing is registered
    /// under `name`.
    pub fn generate(&self, name: &str, parameters: &Parameters) -> Result<String, GeneratorError> {
        let Some(entry) = self.uris.get(name) else {
            tracing::debug!(name, "no external URI registered");
            return Err(GeneratorError::unknown_uri_name(name));
        };

        tracing::trace!(name, parameters = parameters.len(), "generating external URI");
        Ok(entry.render_with(parameters))
    }

    /// Renders the URI registered under `name` with its defaults only.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::UnknownUriName` if nothing is registered
    /// under `name`.
    pub fn generate_default(&self, name: &str) -> Result<String, GeneratorError> {
        self.generate(name, &Parameters::new())
    }

    /// Returns true if a URI is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.uris.contains(name)
    }

    /// Returns the registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.uris.names()
    }

    /// Returns the underlying collection.
    #[must_use]
    pub const fn collection(&self) -> &UriCollection {
        &self.uris
    }

    /// Consumes the generator and returns its collection.
    #[must_use]
    pub fn into_collection(self) -> UriCollection {
        self.uris
    }
}

impl From<UriCollection> for ExternalUriGenerator {
    fn from(uris: UriCollection) -> Self {
        Self { uris }
    }
}

impl TryFrom<GeneratorConfig> for ExternalUriGenerator {
    type Error = GeneratorError;

    fn try_from(config: GeneratorConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UriConfig;
    use crate::error::UriError;

    fn params(pairs: &[(&str, &str)]) -> Parameters {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn sample() -> ExternalUriGenerator {
        let config = GeneratorConfig::new()
            .with_uri("search", UriConfig::new("www.example.com", "https", "/search/{term}"))
            .with_uri("home", UriConfig::new("www.example.com", "http", ""))
            .with_uri("bare", UriConfig::new("cdn.example.com", "", "/{file}"));
        ExternalUriGenerator::new(config).unwrap()
    }

    #[test]
    fn registers_in_config_order() {
        let generator = sample();
        assert_eq!(generator.names().collect::<Vec<_>>(), ["search", "home", "bare"]);
        assert!(generator.contains("home"));
        assert!(generator.collection().iter().all(|(_, e)| e.is_dynamic()));
    }

    #[test]
    fn generate_substitutes_parameters() {
        let generator = sample();
        assert_eq!(
            generator.generate("search", &params(&[("term", "rust")])).unwrap(),
            "https://www.example.com/search/rust"
        );
        assert_eq!(
            generator.generate("bare", &params(&[("file", "logo.png")])).unwrap(),
            "cdn.example.com/logo.png"
        );
    }

    #[test]
    fn repeated_calls_are_independent() {
        let generator = sample();
        let first = generator.generate("search", &params(&[("term", "a")])).unwrap();
        let second = generator.generate("search", &params(&[("term", "b")])).unwrap();
        let third = generator.generate_default("search").unwrap();

        assert_eq!(first, "https://www.example.com/search/a");
        assert_eq!(second, "https://www.example.com/search/b");
        assert_eq!(third, "https://www.example.com/search/{term}");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let generator = sample();
        let result = generator.generate("missing", &Parameters::new());
        assert_eq!(
            result,
            Err(GeneratorError::UnknownUriName {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn invalid_record_names_the_entry() {
        let config = GeneratorConfig::new()
            .with_uri("ok", UriConfig::new("www.example.com", "http", ""))
            .with_uri("broken", UriConfig::new("www.example.com", "ftp", ""));

        let result = ExternalUriGenerator::new(config);
        assert!(matches!(
            result,
            Err(GeneratorError::InvalidUri {
                ref name,
                source: UriError::InvalidScheme { .. },
            }) if name == "broken"
        ));
    }

    #[test]
    fn empty_config_builds_empty_generator() {
        let generator = ExternalUriGenerator::new(GeneratorConfig::new()).unwrap();
        assert!(generator.collection().is_empty());
    }

    #[test]
    fn from_collection_serves_existing_entries() {
        let mut uris = sample().into_collection();
        uris.set_scheme("https").unwrap();

        let generator = ExternalUriGenerator::from(uris);
        assert_eq!(generator.generate_default("home").unwrap(), "https://www.example.com");
    }

    #[test]
    fn generator_is_shareable_across_threads() {
        let generator = std::sync::Arc::new(sample());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let generator = std::sync::Arc::clone(&generator);
                std::thread::spawn(move || {
                    let term = i.to_string();
                    let uri = generator
                        .generate("search", &params(&[("term", &term)]))
                        .unwrap();
                    (term, uri)
                })
            })
            .collect();

        for handle in handles {
            let (term, uri) = handle.join().unwrap();
            assert_eq!(uri, format!("https://www.example.com/search/{term}"));
        }
    }
}
