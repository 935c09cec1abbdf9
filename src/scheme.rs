//! Supported URI schemes.

use std::fmt;
use std::str::FromStr;

use crate::constants::{HTTPS_PORT, HTTP_PORT};
use crate::error::UriError;

/// A scheme from the fixed allow-list.
///
/// # Examples
///
/// ```
/// use external_uri::Scheme;
///
/// let scheme = Scheme::parse("https").unwrap();
/// assert_eq!(scheme.standard_port(), Some(443));
/// assert_eq!(Scheme::parse("").unwrap(), Scheme::None);
/// assert!(Scheme::parse("gopher").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Scheme {
    /// No scheme; the URI renders without a `scheme://` prefix
    #[default]
    None,
    /// `http`
    Http,
    /// `https`
    Https,
}

impl Scheme {
    /// Parses a scheme name. Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidScheme` for anything but `""`, `"http"` and
    /// `"https"`.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        match input {
            "" => Ok(Self::None),
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(UriError::InvalidScheme {
                found: other.to_string(),
            }),
        }
    }

    /// Returns the scheme name without the `://` delimiter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Returns the port implied by the scheme, if any.
    #[must_use]
    pub const fn standard_port(self) -> Option<u16> {
        match self {
            Self::None => None,
            Self::Http => Some(HTTP_PORT),
            Self::Https => Some(HTTPS_PORT),
        }
    }

    /// Returns true for the empty scheme.
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Scheme {
    type Error = UriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl AsRef<str> for Scheme {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
