//! Canonical OS family taxonomy.
//!
//! Every guest-OS string the engine can act on resolves to one of these
//! lineage buckets. An unrecognized OS is represented as `None` at the call
//! site, which is a normal outcome rather than an error: inventories always
//! contain appliances and exotic systems that need human review.

use serde::{Deserialize, Serialize};

/// Canonical OS lineage buckets for migration rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OsFamily {
    /// Red Hat Enterprise Linux ("red hat", "rhel").
    #[serde(rename = "rhel")]
    Rhel,
    /// CentOS.
    #[serde(rename = "centos")]
    CentOs,
    /// Oracle Linux.
    #[serde(rename = "oracle")]
    OracleLinux,
    /// Rocky Linux.
    #[serde(rename = "rocky")]
    Rocky,
    /// Amazon Linux.
    #[serde(rename = "amazon")]
    AmazonLinux,
    /// SUSE Linux Enterprise Server.
    #[serde(rename = "sles")]
    Sles,
    /// Ubuntu.
    #[serde(rename = "ubuntu")]
    Ubuntu,
    /// Debian.
    #[serde(rename = "debian")]
    Debian,
    /// Windows (server and client editions share one bucket).
    #[serde(rename = "windows")]
    Windows,
}

impl OsFamily {
    /// All family variants in rule-table order.
    pub fn all() -> &'static [OsFamily] {
        &[
            OsFamily::Rhel,
            OsFamily::CentOs,
            OsFamily::OracleLinux,
            OsFamily::Rocky,
            OsFamily::AmazonLinux,
            OsFamily::Sles,
            OsFamily::Ubuntu,
            OsFamily::Debian,
            OsFamily::Windows,
        ]
    }

    /// Stable lowercase identifier, matching the rule-file key space.
    pub fn name(&self) -> &'static str {
        match self {
            OsFamily::Rhel => "rhel",
            OsFamily::CentOs => "centos",
            OsFamily::OracleLinux => "oracle",
            OsFamily::Rocky => "rocky",
            OsFamily::AmazonLinux => "amazon",
            OsFamily::Sles => "sles",
            OsFamily::Ubuntu => "ubuntu",
            OsFamily::Debian => "debian",
            OsFamily::Windows => "windows",
        }
    }

    /// Display label used in assessment reasons ("RHEL 7 ...", "SLES 12 SP1 ...").
    pub fn label(&self) -> &'static str {
        match self {
            OsFamily::Rhel => "RHEL",
            OsFamily::CentOs => "CentOS",
            OsFamily::OracleLinux => "Oracle Linux",
            OsFamily::Rocky => "Rocky Linux",
            OsFamily::AmazonLinux => "Amazon Linux",
            OsFamily::Sles => "SLES",
            OsFamily::Ubuntu => "Ubuntu",
            OsFamily::Debian => "Debian",
            OsFamily::Windows => "Windows",
        }
    }

    /// Whether this family follows the Windows rule shape (server/client split).
    pub fn is_windows(&self) -> bool {
        matches!(self, OsFamily::Windows)
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_unique_and_lowercase() {
        let mut seen = std::collections::HashSet::new();
        for family in OsFamily::all() {
            assert!(seen.insert(family.name()));
            assert_eq!(family.name(), family.name().to_lowercase());
        }
    }

    #[test]
    fn test_serde_matches_rule_file_keys() {
        for family in OsFamily::all() {
            let json = serde_json::to_string(family).unwrap();
            assert_eq!(json, format!("\"{}\"", family.name()));
        }
        let parsed: OsFamily = serde_json::from_str("\"oracle\"").unwrap();
        assert_eq!(parsed, OsFamily::OracleLinux);
    }

    #[test]
    fn test_only_windows_is_windows() {
        for family in OsFamily::all() {
            assert_eq!(family.is_windows(), *family == OsFamily::Windows);
        }
    }
}
