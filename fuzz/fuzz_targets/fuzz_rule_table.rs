//! Fuzz target for rule-table JSON deserialization and validation.
//!
//! Rule tables come from external loaders; parsing plus validation must
//! reject malformed input with an error, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vmt_rules::{validate_rule_table, RuleTable};

fuzz_target!(|data: &[u8]| {
    if let Ok(table) = serde_json::from_slice::<RuleTable>(data) {
        let _ = validate_rule_table(&table);
    }
});
