//! Error types for URI validation and generation.

use std::fmt;

/// Errors raised when a [`Uri`](crate::Uri) component fails validation.
///
/// Every constructor and `with_*` mutator returns this error; no partially
/// built value is ever observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// Scheme is not one of `""`, `"http"` or `"https"`
    InvalidScheme {
        /// The rejected scheme
        found: String,
    },
    /// Host is not a syntactically valid bare host
    InvalidHost {
        /// The rejected host
        host: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Port is outside the accepted range or on the deny-list
    InvalidPort {
        /// The rejected port
        port: u16,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Path is not empty and not a valid absolute path
    InvalidPath {
        /// The rejected path
        path: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Query string cannot be parsed into key/value pairs
    InvalidQuery {
        /// The rejected query (without leading '?')
        query: String,
        /// Underlying parse failure
        source: QueryError,
    },
}

impl UriError {
    /// Returns the name of the component that failed validation.
    #[must_use]
    pub const fn component(&self) -> &'static str {
        match self {
            Self::InvalidScheme { .. } => "scheme",
            Self::InvalidHost { .. } => "host",
            Self::InvalidPort { .. } => "port",
            Self::InvalidPath { .. } => "path",
            Self::InvalidQuery { .. } => "query",
        }
    }

    /// Returns true if the scheme was rejected.
    #[must_use]
    pub const fn is_invalid_scheme(&self) -> bool {
        matches!(self, Self::InvalidScheme { .. })
    }

    /// Returns true if the host was rejected.
    #[must_use]
    pub const fn is_invalid_host(&self) -> bool {
        matches!(self, Self::InvalidHost { .. })
    }

    /// Returns true if the port was rejected.
    #[must_use]
    pub const fn is_invalid_port(&self) -> bool {
        matches!(self, Self::InvalidPort { .. })
    }

    /// Returns true if the path was rejected.
    #[must_use]
    pub const fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Returns true if the query was rejected.
    #[must_use]
    pub const fn is_invalid_query(&self) -> bool {
        matches!(self, Self::InvalidQuery { .. })
    }
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScheme { found } => {
                write!(
                    f,
                    "invalid scheme '{found}'; expected one of \"\", \"http\", \"https\""
                )
            }
            Self::InvalidHost { host, reason } => {
                write!(f, "invalid or unsupported host '{host}': {reason}")
            }
            Self::InvalidPort { port, reason } => write!(f, "invalid port {port}: {reason}"),
            Self::InvalidPath { path, reason } => write!(f, "invalid path '{path}': {reason}"),
            Self::InvalidQuery { query, source } => {
                write!(f, "invalid query '{query}': {source}")
            }
        }
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidQuery { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors for query string parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// A pair has a value but no key (e.g. `=value`)
    EmptyKey {
        /// The offending pair
        pair: String,
    },
    /// Character not allowed in a query string
    InvalidChar {
        /// The invalid character
        char: char,
        /// Byte position in the query
        position: usize,
    },
    /// '%' not followed by two hexadecimal digits
    InvalidPercentEncoding {
        /// Byte position of the '%'
        position: usize,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey { pair } => write!(f, "pair '{pair}' has an empty key"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::InvalidPercentEncoding { position } => {
                write!(f, "invalid percent encoding at position {position}")
            }
        }
    }
}

impl std::error::Error for QueryError {}

/// Errors raised by [`ExternalUriGenerator`](crate::ExternalUriGenerator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// No URI is registered under the requested name
    UnknownUriName {
        /// The requested name
        name: String,
    },
    /// A configured URI failed validation
    InvalidUri {
        /// Configuration key of the failing entry
        name: String,
        /// Validation failure
        source: UriError,
    },
}

impl GeneratorError {
    /// Creates an `UnknownUriName` error.
    #[must_use]
    pub fn unknown_uri_name(name: impl Into<String>) -> Self {
        Self::UnknownUriName { name: name.into() }
    }

    /// Creates an `InvalidUri` error.
    #[must_use]
    pub fn invalid_uri(name: impl Into<String>, source: UriError) -> Self {
        Self::InvalidUri {
            name: name.into(),
            source,
        }
    }

    /// Returns true if this error indicates the name was not registered.
    #[must_use]
    pub const fn is_unknown_uri_name(&self) -> bool {
        matches!(self, Self::UnknownUriName { .. })
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownUriName { name } => {
                write!(
                    f,
                    "no URI registered under '{name}'; check the generator configuration"
                )
            }
            Self::InvalidUri { name, source } => {
                write!(f, "invalid URI configured for '{name}': {source}")
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUri { source, .. } => Some(source),
            Self::UnknownUriName { .. } => None,
        }
    }
}
