//! End-to-end classification scenarios over the built-in rule set.
//!
//! Each case is a guest-OS string as it appears in real inventory exports,
//! checked against the full (decision, strategy, risk) triple.

use vmt_common::{Decision, Risk, Strategy};
use vmt_core::Classifier;

fn classifier() -> Classifier {
    Classifier::new(vmt_rules::default_rule_table(), vmt_rules::default_import_rules()).unwrap()
}

#[test]
fn ubuntu_lts_in_supported_band() {
    let a = classifier().assess("Ubuntu Linux 22.04 (64-bit)");
    assert_eq!(a.decision, Decision::MgnSupported);
    assert_eq!(a.strategy, Strategy::Rehost);
    assert_eq!(a.risk, Risk::Low);
}

#[test]
fn windows_server_2019_supported() {
    let a = classifier().assess("Windows Server 2019");
    assert_eq!(a.decision, Decision::MgnSupported);
    assert_eq!(a.strategy, Strategy::Rehost);
    assert_eq!(a.risk, Risk::Low);
}

#[test]
fn thirty_two_bit_linux_hard_blocked() {
    let a = classifier().assess("CentOS 5 32-bit");
    assert_eq!(a.decision, Decision::RebuildRequired);
    assert_eq!(a.strategy, Strategy::Replatform);
    assert_eq!(a.risk, Risk::Critical);
}

#[test]
fn sles_without_service_pack_needs_review() {
    let a = classifier().assess("SUSE Linux Enterprise 12");
    assert_eq!(a.decision, Decision::NeedsReview);
    assert_eq!(a.strategy, Strategy::ManualCheck);
    assert_eq!(a.risk, Risk::High);
    assert!(a.reason.to_lowercase().contains("service pack"));
}

#[test]
fn solaris_is_unknown_os() {
    let a = classifier().assess("Solaris 10");
    assert_eq!(a.decision, Decision::NeedsReview);
    assert_eq!(a.strategy, Strategy::ManualCheck);
    assert_eq!(a.risk, Risk::Critical);
    assert_eq!(a.reason, "Unknown OS");
}

#[test]
fn windows_server_2003_r2_evaluated_as_adjusted_year() {
    let c = classifier();

    // The R2 release maps to 2003.1 and is still below the server range,
    // but it must not collapse onto plain 2003's conditional entry either:
    // 2003.1 is itself listed as conditional in the shipped table.
    assert_eq!(vmt_core::extract_version("Windows Server 2003 R2"), Some(2003.1));

    let r2 = c.assess("Windows Server 2003 R2");
    assert_eq!(r2.decision, Decision::MgnSupportedWithCondition);
    assert_eq!(r2.risk, Risk::Medium);

    let base = c.assess("Windows Server 2003");
    assert_eq!(base.decision, Decision::MgnSupportedWithCondition);
}

#[test]
fn power_state_and_metadata_do_not_affect_decisions() {
    // Classification depends only on the guest-OS string.
    let a = classifier().assess("  Windows Server 2019 Datacenter (64-bit)  ");
    assert_eq!(a.decision, Decision::MgnSupported);
}
