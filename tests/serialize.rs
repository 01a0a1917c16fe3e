use std::net::Ipv6Addr;

use canon_uri::{
    component::{Authority, Host, Path, Query, QueryValue, UserInfo},
    Uri,
};

#[test]
fn canonical_form() {
    let cases = [
        ("http://example.com", "http://example.com/"),
        ("http://example.com//a//b//", "http://example.com/a/b"),
        ("file:///etc/hosts", "file:///etc/hosts"),
        ("mailto:user@example.com", "mailto:/user%40example.com"),
        ("s:a+b", "s:/a%2Bb"),
        ("s:/%7e%41", "s:/~A"),
        ("s:/?a=1&&a=2&b&", "s:/?a=1&a=2&b"),
        ("s:/?", "s:/"),
        ("s:/#", "s:/#"),
        ("s:/#a%20b", "s:/#a%20b"),
        ("s:/#a b", "s:/#a%20b"),
        ("HTTP://[::FFFF:7F00:1]:80", "HTTP://[::ffff:127.0.0.1]:80/"),
        ("http://u:@h", "http://u:@h/"),
    ];

    for (input, canonical) in cases {
        let uri = Uri::parse(input).unwrap();
        assert_eq!(uri.to_string(), canonical, "{input}");
        // The canonical form is a fixed point.
        let reparsed = Uri::parse(canonical).unwrap();
        assert_eq!(reparsed.to_string(), canonical, "{input}");
    }
}

#[test]
fn build() {
    let mut info = UserInfo::new("user");
    info.set_password(Some("p@ss".into()));

    let mut auth = Authority::new(Host::from_addr(Ipv6Addr::LOCALHOST));
    auth.set_userinfo(Some(info));
    auth.set_port(Some(8080));

    let mut query = Query::new();
    query.append("q", "a&b");
    query.insert("flag", QueryValue::new());

    let mut uri = Uri::new("https");
    uri.set_authority(Some(auth));
    uri.set_path(["dir", "file name.txt"].into_iter().collect());
    uri.set_query(Some(query));
    uri.set_fragment(Some("part 2".into()));

    let s = "https://user:p%40ss@[::1]:8080/dir/file%20name.txt?q=a%26b&flag#part%202";
    assert_eq!(uri.to_string(), s);
    assert_eq!(Uri::parse(s).unwrap(), uri);
}

#[test]
fn modify() {
    let mut uri = Uri::parse("http://example.com/a?x=1#f").unwrap();

    uri.set_scheme("https");
    uri.authority_mut().unwrap().set_port(Some(8443));
    uri.path_mut().push("b");
    uri.query_mut().unwrap().append("x", "2");
    uri.set_fragment(None);
    assert_eq!(uri.to_string(), "https://example.com:8443/a/b?x=1&x=2");

    uri.set_authority(None);
    uri.set_path(Path::new());
    uri.set_query(None);
    assert_eq!(uri.to_string(), "https:/");
}

#[test]
fn query_delimiter() {
    let mut query = Query::with_delimiter(b';');
    query.append("a", "1");
    query.append("b", "2");

    let mut uri = Uri::new("s");
    uri.set_query(Some(query));
    assert_eq!(uri.to_string(), "s:/?a=1;b=2");

    // A parsed URI splits its query on the default delimiter.
    let reparsed = Uri::parse(&uri.to_string()).unwrap();
    assert!(reparsed.query().unwrap().keys().eq(["a"]));
    assert_eq!(
        reparsed.query().unwrap().get("a").unwrap().as_single(),
        Ok("1;b=2")
    );
}

#[test]
fn debug() {
    let uri = Uri::parse("s://h:1/p?k=v#f").unwrap();
    let s = format!("{uri:?}");
    assert!(s.starts_with(r#"Uri { scheme: "s", authority: Some(Authority {"#));
    assert!(s.contains(r#"path: ["p"]"#));
    assert!(s.contains(r#"entries: {"k": ["v"]}"#));
    assert!(s.ends_with(r#"fragment: Some("f") }"#));
}
