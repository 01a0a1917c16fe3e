//! IP address parsing for hosts.
//!
//! Addresses go through the `FromStr` impls of `core::net`, which reject
//! leading zeros in IPv4 octets and accept an IPv4 tail in IPv6 addresses.

use core::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Parses an IP address from a string slice.
///
/// The input is parsed as IPv6 if it contains a colon and as IPv4 otherwise.
/// Square brackets are not accepted.
///
/// # Examples
///
/// ```
/// use canon_uri::ip;
/// use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
///
/// assert_eq!(ip::parse("10.0.0.1"), Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
/// assert_eq!(ip::parse("::1"), Some(IpAddr::V6(Ipv6Addr::LOCALHOST)));
/// assert_eq!(ip::parse("[::1]"), None);
/// assert_eq!(ip::parse("010.0.0.1"), None);
/// ```
#[must_use]
pub fn parse(s: &str) -> Option<IpAddr> {
    if s.contains(':') {
        parse_v6(s).map(IpAddr::V6)
    } else {
        parse_v4(s).map(IpAddr::V4)
    }
}

/// Parses an IPv4 address from a string slice.
#[must_use]
pub fn parse_v4(s: &str) -> Option<Ipv4Addr> {
    s.parse().ok()
}

/// Parses an IPv6 address from a string slice.
#[must_use]
pub fn parse_v6(s: &str) -> Option<Ipv6Addr> {
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        assert!(matches!(parse("127.0.0.1"), Some(IpAddr::V4(_))));
        assert!(matches!(parse("::"), Some(IpAddr::V6(_))));
        assert!(parse("example.com").is_none());
        assert!(parse("").is_none());
        assert!(parse("1.2.3.4:80").is_none());
    }
}
