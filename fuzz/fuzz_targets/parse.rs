#![no_main]
use canon_uri::Uri;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(u1) = Uri::parse(data) else {
        return;
    };
    let s1 = u1.to_string();
    let u2 = Uri::parse(&s1).unwrap();
    assert_eq!(u1.scheme(), u2.scheme());
    assert_eq!(u1.authority(), u2.authority());
    assert_eq!(u1.path(), u2.path());
    assert_eq!(u1.fragment(), u2.fragment());
    assert_eq!(s1, u2.to_string());
});
