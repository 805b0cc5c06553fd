//! Property-based tests for classification invariants.

use proptest::prelude::*;

use vmt_common::Decision;
use vmt_core::{classify, extract_version, normalize};
use vmt_rules::{default_import_rules, default_rule_table};

/// OS-like description strings: a realistic mix of family names, versions,
/// qualifiers, and junk, without degenerate phrase overlaps.
fn os_string() -> impl Strategy<Value = String> {
    let family = prop_oneof![
        Just("Red Hat Enterprise Linux"),
        Just("CentOS"),
        Just("Oracle Linux"),
        Just("Rocky Linux"),
        Just("Amazon Linux"),
        Just("SUSE Linux Enterprise Server"),
        Just("Ubuntu Linux"),
        Just("Debian GNU/Linux"),
        Just("Microsoft Windows Server"),
        Just("Microsoft Windows"),
        Just("Solaris"),
        Just("FreeBSD"),
        Just("VMware Photon OS"),
    ];
    let version = prop_oneof![
        Just(String::new()),
        (1u32..30).prop_map(|v| format!(" {v}")),
        (1u32..30, 1u32..20).prop_map(|(a, b)| format!(" {a}.{:02}", b)),
        (2000u32..2026).prop_map(|y| format!(" {y}")),
        (2000u32..2026).prop_map(|y| format!(" {y} R2")),
    ];
    let sp = prop_oneof![
        Just(String::new()),
        (1u32..6).prop_map(|s| format!(" SP{s}")),
    ];
    let suffix = prop_oneof![
        Just(""),
        Just(" (64-bit)"),
        Just(" (32-bit)"),
        Just(" 64-bit"),
        Just(" 32-bit"),
        Just(" Datacenter"),
        Just(" Standard"),
        Just(" or later"),
    ];

    (family, version, sp, suffix).prop_map(|(f, v, s, x)| format!("{f}{v}{s}{x}"))
}

proptest! {
    /// Classification is total: any input string yields a decision with its
    /// derived strategy, and never panics.
    #[test]
    fn classify_is_total(raw in "\\PC*") {
        let rules = default_rule_table();
        let import = default_import_rules();
        let a = classify(&raw, &rules, &import);
        prop_assert_eq!(a.strategy, a.decision.strategy());
        prop_assert!(!a.reason.is_empty());
    }

    /// Any string containing "32-bit" without "windows" is hard-blocked,
    /// regardless of everything else in it.
    #[test]
    fn hard_block_precedence(prefix in "[A-Za-z0-9 .]{0,20}", suffix in "[A-Za-z0-9 .]{0,20}") {
        let raw = format!("{prefix} 32-bit {suffix}");
        prop_assume!(!raw.to_lowercase().contains("windows"));

        let rules = default_rule_table();
        let import = default_import_rules();
        let a = classify(&raw, &rules, &import);
        prop_assert_eq!(a.decision, Decision::RebuildRequired);
    }

    /// Normalization is idempotent over OS-like inputs.
    #[test]
    fn normalize_is_idempotent(raw in os_string()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    /// An R2 release always compares strictly newer than its base year, and
    /// still older than the following year.
    #[test]
    fn r2_is_newer_than_base_year(year in 2000u32..2100) {
        let base = extract_version(&format!("Windows Server {year}")).unwrap();
        let r2 = extract_version(&format!("Windows Server {year} R2")).unwrap();
        prop_assert!(r2 > base);
        prop_assert!(r2 < (year + 1) as f64);
    }

    /// Classification depends only on the string, not on call order:
    /// repeated calls agree (engine is stateless).
    #[test]
    fn classify_is_deterministic(raw in os_string()) {
        let rules = default_rule_table();
        let import = default_import_rules();
        let first = classify(&raw, &rules, &import);
        let second = classify(&raw, &rules, &import);
        prop_assert_eq!(first, second);
    }
}
