//! Bare host validation.
//!
//! A host is accepted when it would parse as the complete authority of
//! `http://<host>`:
//!
//! ```abnf
//! host  = label *( "." label )
//! label = 1*63( ALPHA / DIGIT / "-" )
//! ```
//!
//! Labels cannot start or end with a hyphen and the whole host is limited
//! to 253 characters. Dotted IPv4 addresses satisfy the same grammar.
//! User info, ports and IPv6 literals are not part of a bare host.

use crate::constants::{MAX_DNS_DOMAIN_LENGTH, MAX_DNS_LABEL_LENGTH};
use crate::error::UriError;

/// Validates a non-empty host.
pub(crate) fn validate(host: &str) -> Result<(), UriError> {
    let invalid = |reason| UriError::InvalidHost {
        host: host.to_string(),
        reason,
    };

    if host.len() > MAX_DNS_DOMAIN_LENGTH {
        return Err(invalid("host exceeds 253 character limit"));
    }

    for label in host.split('.') {
        if label.is_empty() {
            return Err(invalid(
                "empty label (consecutive dots or leading/trailing dot)",
            ));
        }

        if label.len() > MAX_DNS_LABEL_LENGTH {
            return Err(invalid("label exceeds 63 character limit"));
        }

        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid(
                "only ASCII letters, digits, hyphens and dots are allowed",
            ));
        }

        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid("label cannot start or end with hyphen"));
        }
    }

    Ok(())
}
