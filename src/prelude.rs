//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use external_uri::prelude::*;
//!
//! let uri = Uri::new(UriParts::new("www.example.com", "https", "")).unwrap();
//! assert_eq!(uri.scheme(), Scheme::Https);
//! ```

pub use crate::{
    // Core types
    DynamicUri, Entry, Parameters, QueryParams, Scheme, Uri, UriCollection, UriParts,
    // Builder
    UriBuilder,
    // Generator
    ExternalUriGenerator, GeneratorConfig, UriConfig,
    // Errors
    GeneratorError, QueryError, UriError,
    // Constants
    HTTPS_PORT, HTTP_PORT, MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH, MAX_PORT, MIN_PORT,
    PLACEHOLDER_CLOSE, PLACEHOLDER_OPEN, UNSAFE_PORTS,
};
