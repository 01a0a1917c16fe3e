#![cfg(feature = "serde")]

use canon_uri::{
    component::{Host, Path, Query},
    Uri,
};

#[test]
fn uri() {
    let uri = Uri::parse("http://example.com/a%20b?x=1#f").unwrap();
    let json = serde_json::to_string(&uri).unwrap();
    assert_eq!(json, r#""http://example.com/a%20b?x=1#f""#);
    assert_eq!(serde_json::from_str::<Uri>(&json).unwrap(), uri);

    // Deserializing yields the parsed value, serializing the canonical form.
    let uri: Uri = serde_json::from_str(r#""http://example.com//a/""#).unwrap();
    assert_eq!(serde_json::to_string(&uri).unwrap(), r#""http://example.com/a""#);
}

#[test]
fn components() {
    let host: Host = serde_json::from_str(r#""[::1]""#).unwrap();
    assert!(host.is_addr());

    let path: Path = serde_json::from_str(r#""/a/b""#).unwrap();
    assert_eq!(serde_json::to_string(&path).unwrap(), r#""/a/b""#);

    let query: Query = serde_json::from_str(r#"["?a=1&b", "&"]"#).unwrap();
    assert_eq!(serde_json::to_string(&query).unwrap(), r#"["?a=1&b","&"]"#);
}

#[test]
fn query_delimiter() {
    let query = Query::parse_with_delimiter("x=1;y=2", b';').unwrap();
    let json = serde_json::to_string(&query).unwrap();
    assert_eq!(json, r#"["?x=1;y=2",";"]"#);

    let back: Query = serde_json::from_str(&json).unwrap();
    assert_eq!(back.delimiter(), b';');
    assert!(back.keys().eq(["x", "y"]));
    assert_eq!(back, query);

    assert!(serde_json::from_str::<Query>(r#"["?a.b", "."]"#).is_err());
    assert!(serde_json::from_str::<Query>(r#"["?a", "é"]"#).is_err());
    assert!(serde_json::from_str::<Query>(r#""?a=1""#).is_err());
}

#[test]
fn error() {
    let e = serde_json::from_str::<Uri>(r#""no-scheme""#).unwrap_err();
    assert!(e.to_string().contains("missing scheme"));

    assert!(serde_json::from_str::<Host>(r#""[::1""#).is_err());
    assert!(serde_json::from_str::<Uri>("42").is_err());
}
