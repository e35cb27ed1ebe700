#![no_main]

use libfuzzer_sys::fuzz_target;
use mongo_bootstrap::{redact, sanitize};

fuzz_target!(|url: &str| {
    let sanitized = sanitize(url);
    let redacted = redact(url);

    if !url.contains("://") {
        assert_eq!(sanitized, url);
        assert_eq!(redacted, url);
    }

    // Everything after the separating '@' is carried over verbatim
    if let Some(at) = url.rfind('@') {
        assert!(sanitized.ends_with(&url[at..]));
    }
});
