use canon_uri::{
    component::{Authority, Host, UserInfo},
    error::{DecodeErrorKind, Error},
};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::num::IntErrorKind;

#[test]
fn parse_full() {
    let a = Authority::parse("//user:pass@example.com:8080").unwrap();
    let info = a.userinfo().unwrap();
    assert_eq!(info.username(), "user");
    assert_eq!(info.password(), Some("pass"));
    assert_eq!(a.host().name(), Some("example.com"));
    assert_eq!(a.port(), Some(8080));
    assert_eq!(a.to_string(), "//user:pass@example.com:8080");
}

#[test]
fn parse_parts() {
    let a = Authority::parse("example.com").unwrap();
    assert!(a.userinfo().is_none());
    assert_eq!(a.host().name(), Some("example.com"));
    assert_eq!(a.port(), None);
    assert_eq!(a.to_string(), "//example.com");

    let a = Authority::parse("//anonymous@ftp.example.com").unwrap();
    assert_eq!(a.userinfo(), Some(&UserInfo::new("anonymous")));
    assert_eq!(a.port(), None);

    let a = Authority::parse("//127.0.0.1:0").unwrap();
    assert_eq!(a.host().to_addr(), Ok(IpAddr::V4(Ipv4Addr::LOCALHOST)));
    assert_eq!(a.port(), Some(0));

    let a = Authority::parse("//").unwrap();
    assert_eq!(a.host().name(), Some(""));
    assert_eq!(a.to_string(), "//");
}

#[test]
fn parse_ipv6() {
    let a = Authority::parse("//[fe80::abcd]:6780").unwrap();
    assert_eq!(
        a.host().to_addr(),
        Ok(IpAddr::V6(Ipv6Addr::new(0xfe80, 0, 0, 0, 0, 0, 0, 0xabcd)))
    );
    assert_eq!(a.port(), Some(6780));
    assert_eq!(a.to_string(), "//[fe80::abcd]:6780");

    let a = Authority::parse("//u:p@[::1]").unwrap();
    assert_eq!(a.userinfo().unwrap().password(), Some("p"));
    assert_eq!(a.host().to_addr(), Ok(IpAddr::V6(Ipv6Addr::LOCALHOST)));
    assert_eq!(a.port(), None);
}

#[test]
fn userinfo_encoding() {
    let a = Authority::parse("//us%20er:p%3Ass@host").unwrap();
    let info = a.userinfo().unwrap();
    assert_eq!(info.username(), "us er");
    assert_eq!(info.password(), Some("p:ss"));
    assert_eq!(a.to_string(), "//us%20er:p%3Ass@host");

    // Only the first colon separates the password.
    let info = UserInfo::parse("a:b:c").unwrap();
    assert_eq!(info.username(), "a");
    assert_eq!(info.password(), Some("b:c"));
    assert_eq!(info.to_string(), "a:b%3Ac");

    let info = UserInfo::parse("user:").unwrap();
    assert_eq!(info.password(), Some(""));
    assert_eq!(info.to_string(), "user:");
}

#[test]
fn parse_errors() {
    assert!(matches!(
        Authority::parse("//example.com:65536"),
        Err(Error::InvalidPort(_))
    ));
    assert!(matches!(
        Authority::parse("//example.com:-1"),
        Err(Error::InvalidPort(_))
    ));
    assert!(matches!(
        Authority::parse("//example.com:"),
        Err(Error::InvalidPort(_))
    ));
    assert!(matches!(
        Authority::parse("//example.com:+80"),
        Err(Error::InvalidPort(e)) if *e.kind() == IntErrorKind::InvalidDigit
    ));
    assert!(matches!(
        Authority::parse("//[::1]:+443"),
        Err(Error::InvalidPort(_))
    ));
    assert!(matches!(
        Authority::parse("//[::1]:http"),
        Err(Error::InvalidPort(_))
    ));
    assert_eq!(
        Authority::parse("//[::1]]"),
        Err(Error::InvalidIpAddr)
    );
    assert_eq!(
        Authority::parse("//[::1:8080"),
        Err(Error::MalformedHostname)
    );
    assert!(matches!(
        Authority::parse("//%zz@host"),
        Err(Error::Decode(e)) if e.kind() == DecodeErrorKind::InvalidOctet
    ));
}

#[test]
fn build() {
    let mut info = UserInfo::new("ferris");
    info.set_password(Some("c r@b".into()));

    let mut a = Authority::new(Host::from_name("example.com"));
    a.set_userinfo(Some(info));
    a.set_port(Some(443));
    assert_eq!(a.to_string(), "//ferris:c%20r%40b@example.com:443");
    assert_eq!(Authority::parse(&a.to_string()), Ok(a.clone()));

    a.set_userinfo(None);
    a.set_port(None);
    a.set_host(Host::from_addr(Ipv6Addr::LOCALHOST));
    assert_eq!(a.to_string(), "//[::1]");
}
