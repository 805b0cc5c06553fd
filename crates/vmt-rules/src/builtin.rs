//! Built-in production rule set.
//!
//! The AWS MGN support matrix as encoded by the shipped rule files, built in
//! memory so embedders and tests share one source of truth. External loaders
//! may supply their own tables instead; nothing in the engine refers to these
//! defaults implicitly.

use std::collections::BTreeMap;

use crate::ruleset::{
    FamilyChecks, FamilyRules, RuleTable, SpecialRule, VersionRange, VmImportRules,
};
use vmt_common::OsFamily;

fn linux(
    supported_range: Option<VersionRange>,
    supported_minor_ranges: Vec<VersionRange>,
    conditional: Vec<f64>,
) -> FamilyRules {
    FamilyRules {
        special_rules: BTreeMap::new(),
        checks: FamilyChecks::Linux {
            supported_range,
            supported_minor_ranges,
            conditional,
        },
    }
}

/// The default MGN rule table.
pub fn default_rule_table() -> RuleTable {
    let mut table = RuleTable::default();

    table.insert(
        OsFamily::Rhel,
        linux(Some(VersionRange::new(7.0, 9.0)), Vec::new(), vec![6.0]),
    );
    table.insert(
        OsFamily::CentOs,
        linux(Some(VersionRange::new(7.0, 8.0)), Vec::new(), vec![6.0]),
    );
    table.insert(
        OsFamily::OracleLinux,
        linux(Some(VersionRange::new(7.0, 9.0)), Vec::new(), Vec::new()),
    );
    table.insert(
        OsFamily::Rocky,
        linux(Some(VersionRange::new(8.0, 9.0)), Vec::new(), Vec::new()),
    );
    table.insert(
        OsFamily::AmazonLinux,
        linux(Some(VersionRange::new(2.0, 2023.0)), Vec::new(), Vec::new()),
    );
    table.insert(
        OsFamily::Ubuntu,
        linux(
            None,
            vec![VersionRange::new(14.04, 22.04)],
            vec![12.04],
        ),
    );
    table.insert(
        OsFamily::Debian,
        linux(Some(VersionRange::new(9.0, 11.0)), Vec::new(), vec![8.0]),
    );

    // SLES acceptance is driven entirely by service-pack overrides.
    let mut sles_special = BTreeMap::new();
    sles_special.insert(11, SpecialRule { min_service_pack: 4 });
    sles_special.insert(12, SpecialRule { min_service_pack: 1 });
    table.insert(
        OsFamily::Sles,
        FamilyRules {
            special_rules: sles_special,
            checks: FamilyChecks::Linux {
                supported_range: Some(VersionRange::new(15.0, 15.0)),
                supported_minor_ranges: Vec::new(),
                conditional: Vec::new(),
            },
        },
    );

    table.insert(
        OsFamily::Windows,
        FamilyRules {
            special_rules: BTreeMap::new(),
            checks: FamilyChecks::Windows {
                // 2008.1 is Server 2008 R2; plain 2008 is conditional only.
                server_supported_range: Some(VersionRange::new(2008.1, 2022.0)),
                client_supported: vec![10.0, 11.0],
                conditional: vec![2003.0, 2003.1, 2008.0],
            },
        },
    );

    table
}

/// The default VM Import/Export eligibility table.
pub fn default_import_rules() -> VmImportRules {
    VmImportRules {
        windows: true,
        linux_families: vec![
            OsFamily::Rhel,
            OsFamily::CentOs,
            OsFamily::Ubuntu,
            OsFamily::Debian,
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_has_an_entry() {
        let table = default_rule_table();
        for family in OsFamily::all() {
            assert!(table.get(*family).is_some(), "missing rules for {}", family);
        }
    }

    #[test]
    fn test_windows_entry_is_windows_shaped() {
        let table = default_rule_table();
        let windows = table.get(OsFamily::Windows).unwrap();
        assert!(matches!(windows.checks, FamilyChecks::Windows { .. }));
    }

    #[test]
    fn test_sles_special_rules_cover_sp_gated_releases() {
        let table = default_rule_table();
        let sles = table.get(OsFamily::Sles).unwrap();
        assert_eq!(sles.special_rules[&11].min_service_pack, 4);
        assert_eq!(sles.special_rules[&12].min_service_pack, 1);
    }

    #[test]
    fn test_server_range_excludes_plain_2008() {
        let table = default_rule_table();
        let windows = table.get(OsFamily::Windows).unwrap();
        if let FamilyChecks::Windows {
            server_supported_range: Some(range),
            ..
        } = &windows.checks
        {
            assert!(!range.contains(2008.0));
            assert!(range.contains(2008.1));
        } else {
            panic!("expected a server range");
        }
    }
}
