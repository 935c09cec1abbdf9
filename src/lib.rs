//! Validated URIs, `{placeholder}` templates and a named generator for
//! links to external services.
//!
//! # Overview
//!
//! The crate is built from four layers:
//!
//! - [`Uri`]: an immutable, validated URI value. Every `with_*` method
//!   returns a new value and leaves the original untouched.
//! - [`DynamicUri`]: a [`Uri`] whose rendered form contains `{name}`
//!   tokens, filled from defaults and a per-call parameter overlay.
//! - [`UriCollection`]: an ordered, name-keyed registry of URIs with bulk
//!   host and scheme rewrites.
//! - [`ExternalUriGenerator`]: builds one [`DynamicUri`] per configured
//!   record and renders them by name.
//!
//! # Quick Start
//!
//! ```rust
//! use external_uri::{ExternalUriGenerator, GeneratorConfig, Parameters, UriConfig};
//!
//! let config = GeneratorConfig::new()
//!     .with_uri("search", UriConfig::new("www.example.com", "https", "/search/{term}"));
//! let generator = ExternalUriGenerator::new(config).unwrap();
//!
//! let params = Parameters::from([("term".to_string(), "rust".to_string())]);
//! assert_eq!(
//!     generator.generate("search", &params).unwrap(),
//!     "https://www.example.com/search/rust"
//! );
//! ```
//!
//! # Building URIs
//!
//! ```rust
//! use external_uri::{Uri, UriParts};
//!
//! let uri = Uri::new(UriParts::new("www.example.com", "http", "/path")).unwrap();
//! let secure = uri.with_scheme("https").unwrap().with_port(Some(88)).unwrap();
//!
//! assert_eq!(uri.to_string(), "http://www.example.com/path");
//! assert_eq!(secure.to_string(), "https://www.example.com:88/path");
//! ```
//!
//! # Validation Rules
//!
//! | Component | Rule |
//! |-----------|------|
//! | Scheme | `""`, `http` or `https` (exact match) |
//! | Host | DNS labels of letters, digits and `-`; at most 253 chars |
//! | Port | `0..=1023`, minus [`UNSAFE_PORTS`] |
//! | Path | RFC 3986 path characters, plus `{` and `}` |
//! | Query | `key=value` pairs of path characters and `?`; keys non-empty |
//!
//! # Logging
//!
//! Registration, bulk rewrites and generation emit [`tracing`] events at
//! `debug` and `trace` level. The crate never installs a subscriber.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for the value types and
//!   [`GeneratorConfig`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod builder;
mod collection;
mod config;
mod constants;
mod dynamic_uri;
mod error;
mod generator;
mod host;
#[cfg(kani)]
mod kani_impls;
mod path;
pub mod prelude;
mod query;
mod scheme;
mod uri;

pub use builder::UriBuilder;
pub use collection::{Entry, UriCollection};
pub use config::{GeneratorConfig, UriConfig};
pub use constants::{
    HTTPS_PORT, HTTP_PORT, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT,
    PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, UNSAFE_PORTS,
};
pub use dynamic_uri::{DynamicUri, Parameters};
pub use error::{GeneratorError, QueryError, UriError};
pub use generator::ExternalUriGenerator;
pub use query::QueryParams;
pub use scheme::Scheme;
pub use uri::{Uri, UriParts};
