#![no_main]
use canon_uri::pct_enc;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let encoded = pct_enc::encode(data);
    assert!(encoded.is_ascii());
    assert_eq!(data, pct_enc::decode(&encoded).unwrap());

    // Any input decodes to the same string as its fully encoded form
    // or fails to decode at all.
    if let Ok(decoded) = pct_enc::decode(data) {
        assert_eq!(decoded, pct_enc::decode(&pct_enc::encode(&decoded)).unwrap());
    }
});
