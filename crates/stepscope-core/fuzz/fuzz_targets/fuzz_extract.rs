//! Fuzz target for the lineage scanner.
//!
//! This tests that `analyze()` doesn't panic on arbitrary text inputs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use stepscope_core::{analyze, AnalyzeRequest};

fuzz_target!(|data: &[u8]| {
    if let Ok(code) = std::str::from_utf8(data) {
        // The analyze function should never panic, even on garbage input.
        // Malformed lines degrade to issues, not failures.
        let _ = analyze(&AnalyzeRequest::from_code(code));
    }
});
