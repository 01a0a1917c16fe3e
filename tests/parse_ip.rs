use std::net::{Ipv4Addr, Ipv6Addr};

use canon_uri::{
    component::Host,
    error::Error,
    ip::{self, parse_v4, parse_v6},
};

#[test]
fn leading_zeros() {
    assert_eq!(parse_v4("0.0.0.0"), Some(Ipv4Addr::UNSPECIFIED));
    assert!(parse_v4("255.0.0.01").is_none());
    assert!(parse_v4("255.0.00.0").is_none());
    assert_eq!(Host::parse("010.0.0.1"), Err(Error::InvalidIpAddr));

    // Leading zeros within an IPv6 group are fine.
    assert_eq!(
        parse_v6("1:02:003:0004:0005:006:07:8"),
        Some(Ipv6Addr::new(1, 2, 3, 4, 5, 6, 7, 8))
    );
}

#[test]
fn brackets() {
    assert!(ip::parse("[::1]").is_none());
    assert!(parse_v6("[::1]").is_none());

    // Host strips them before handing the address over.
    let host = Host::parse("[::1]").unwrap();
    assert_eq!(host.to_addr(), Ok(Ipv6Addr::LOCALHOST.into()));
    assert_eq!(Host::parse("[1:2:3:4:5:6:7]"), Err(Error::InvalidIpAddr));
}

#[test]
fn v4_in_v6() {
    assert_eq!(
        parse_v6("::FFFF:192.0.2.33"),
        Some(Ipv6Addr::new(0, 0, 0, 0, 0, 0xFFFF, 49152, 545))
    );
    assert_eq!(
        parse_v6("64:ff9b::192.0.2.33"),
        Some(Ipv6Addr::new(0x64, 0xff9b, 0, 0, 0, 0, 49152, 545))
    );
    assert!(parse_v6("::127.0.0.1:").is_none());
    assert!(parse_v6("1:2:3:4:5:6:7:127.0.0.1").is_none());

    let host = Host::parse("[::ffff:192.0.2.33]").unwrap();
    assert_eq!(host.to_string(), "[::ffff:192.0.2.33]");
}
