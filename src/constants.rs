//! Constants for URI validation.

/// Lowest port accepted for an explicit port.
pub const MIN_PORT: u16 = 0;

/// Highest port accepted for an explicit port (end of the well-known range).
pub const MAX_PORT: u16 = 1023;

/// Well-known ports that are rejected even though they fall inside
/// [`MIN_PORT`]..=[`MAX_PORT`].
///
/// Sorted ascending so lookups can use binary search.
pub const UNSAFE_PORTS: [u16; 29] = [
    9, 15, 81, 82, 99, 100, 158, 300, 491, 531, 545, 625, 631, 782, 783, 829, 843, 888, 897, 898,
    904, 911, 944, 953, 973, 981, 999, 1002, 1010,
];

/// Standard port of the `http` scheme.
pub const HTTP_PORT: u16 = 80;

/// Standard port of the `https` scheme.
pub const HTTPS_PORT: u16 = 443;

/// DNS label maximum length.
pub const MAX_DNS_LABEL_LENGTH: usize = 63;

/// DNS domain maximum length.
pub const MAX_DNS_DOMAIN_LENGTH: usize = 253;

/// Opening delimiter of a template placeholder.
pub const PLACEHOLDER_OPEN: char = '{';

/// Closing delimiter of a template placeholder.
pub const PLACEHOLDER_CLOSE: char = '}';
