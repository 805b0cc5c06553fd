//! Fuzz target for OS classification totality.
//!
//! Classification must return a decision for every possible guest-OS string
//! without panicking; inventory exports routinely contain garbage.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vmt_core::classify;
use vmt_rules::{default_import_rules, default_rule_table};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let rules = default_rule_table();
        let import = default_import_rules();
        let assessment = classify(s, &rules, &import);
        // Strategy derivation must stay total as well.
        assert_eq!(assessment.strategy, assessment.decision.strategy());
    }
});
