#![no_main]

use libfuzzer_sys::fuzz_target;
use mjc::{ParserConfig, check_source};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Scanner and parser must terminate on anything, with or without debouncing
        let outcome = check_source(s, &ParserConfig::default());
        assert!(outcome.report.reached_eof || outcome.report.error_count() > 0);
        let _ = check_source(s, &ParserConfig::new().with_min_error_distance(0).with_trace(true));
    }
});
