//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::constants::{MAX_PORT, UNSAFE_PORTS};
use crate::{Scheme, Uri, UriParts};

/// Valid characters for domain labels: alphanumeric and hyphen
const DOMAIN_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

/// Valid label start/end characters: letters and digits
const DOMAIN_BOUNDARY_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

fn arbitrary_label(max_len: usize) -> String {
    let len: usize = kani::any();
    let len = 1 + (len % max_len);

    (0..len)
        .map(|i| {
            if i == 0 || i == len - 1 {
                pick(DOMAIN_BOUNDARY_CHARS)
            } else {
                pick(DOMAIN_CHARS)
            }
        })
        .collect()
}

impl kani::Arbitrary for Scheme {
    fn any() -> Self {
        match kani::any::<u8>() % 3 {
            0 => Self::None,
            1 => Self::Http,
            _ => Self::Https,
        }
    }
}

impl kani::Arbitrary for Uri {
    fn any() -> Self {
        // Two short labels keep the search tractable
        let host = format!("{}.{}", arbitrary_label(4), arbitrary_label(3));
        let scheme: Scheme = kani::any();

        let port = if kani::any() {
            let port: u16 = kani::any();
            kani::assume(Uri::is_allowed_port(port));
            Some(port)
        } else {
            None
        };

        let mut parts = UriParts::new(host, scheme.as_str(), "");
        parts.port = port;
        Uri::new(parts).expect("valid URI by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: a port is allowed exactly when it is in range and not reserved
#[kani::proof]
#[kani::unwind(32)]
fn proof_port_acceptance() {
    let port: u16 = kani::any();
    let expected = port <= MAX_PORT && !UNSAFE_PORTS.contains(&port);
    assert_eq!(Uri::is_allowed_port(port), expected);
}

/// Proof: a scheme's string form parses back to the same scheme
#[kani::proof]
fn proof_scheme_roundtrip() {
    let scheme: Scheme = kani::any();
    assert_eq!(Scheme::parse(scheme.as_str()), Ok(scheme));
}

/// Proof: the visible port never equals the scheme's standard port
#[kani::proof]
#[kani::unwind(10)]
fn proof_standard_port_hidden() {
    let uri: Uri = kani::any();
    if let Some(port) = uri.port() {
        assert_ne!(Some(port), uri.scheme().standard_port());
        assert!(!uri.scheme().is_none());
    }
}

/// Proof: `with_port(None)` clears the port and keeps the host
#[kani::proof]
#[kani::unwind(10)]
fn proof_with_port_none_clears() {
    let uri: Uri = kani::any();
    let cleared = uri.with_port(None).expect("removing a port is always valid");
    assert_eq!(cleared.raw_port(), None);
    assert_eq!(cleared.host(), uri.host());
}
