//! Rule-table data model.
//!
//! One [`FamilyRules`] record per canonical OS family, loaded once at process
//! start and read-only thereafter. The Windows and Linux rule shapes differ
//! (server/client split vs. version ranges), so the family-specific fields
//! live behind the [`FamilyChecks`] tagged variant rather than one loosely
//! typed bag of optionals: a rule file that mixes Windows fields into a
//! Linux entry fails to deserialize instead of silently misbehaving.
//!
//! Version values are `f64` on a fractional scale: a 4-digit year (2019.0),
//! an R2-adjusted year (2008.1), or a short/dotted release (8.6). Special
//! rules are keyed by the integer-truncated version so that R2-adjusted
//! values land on their base release's entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use vmt_common::OsFamily;

/// Inclusive numeric version band `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VersionRange {
    pub low: f64,
    pub high: f64,
}

impl VersionRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Whether `version` falls inside this band, both ends inclusive.
    pub fn contains(&self, version: f64) -> bool {
        self.low <= version && version <= self.high
    }
}

/// Per-exact-version override requiring a minimum service pack.
///
/// Takes precedence over every range/conditional check for its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialRule {
    /// Minimum service-pack level (SP1 = 1).
    pub min_service_pack: u32,
}

/// Family-specific acceptance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FamilyChecks {
    /// Windows server/client split.
    Windows {
        /// Accepted server release band (R2-adjusted years included).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        server_supported_range: Option<VersionRange>,
        /// Accepted client versions (10, 11).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        client_supported: Vec<f64>,
        /// Versions supported only with an upgrade plan.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        conditional: Vec<f64>,
    },
    /// Linux range checks, minor bands evaluated before the major range.
    Linux {
        /// Coarse major-version band.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        supported_range: Option<VersionRange>,
        /// Fine-grained minor-version bands (e.g. Ubuntu 20.04–22.04).
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        supported_minor_ranges: Vec<VersionRange>,
        /// Versions supported but nearing deprecation.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        conditional: Vec<f64>,
    },
}

impl FamilyChecks {
    /// Empty Linux check set (accepts nothing, falls through to import).
    pub fn empty_linux() -> Self {
        FamilyChecks::Linux {
            supported_range: None,
            supported_minor_ranges: Vec::new(),
            conditional: Vec::new(),
        }
    }
}

/// Complete rule record for one OS family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyRules {
    /// Per-version overrides, keyed by integer-truncated version.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub special_rules: BTreeMap<u32, SpecialRule>,

    /// Range/membership checks for this family's shape.
    pub checks: FamilyChecks,
}

impl FamilyRules {
    /// Look up the special rule covering `version`, truncating R2-adjusted
    /// and dotted values onto their base release key.
    pub fn special_rule_for(&self, version: f64) -> Option<&SpecialRule> {
        if version < 0.0 {
            return None;
        }
        self.special_rules.get(&(version.trunc() as u32))
    }
}

/// The full rule table: one entry per configured family.
///
/// A family with no entry is a valid state handled by the engine's
/// unknown-rules fallback, not a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    pub families: BTreeMap<OsFamily, FamilyRules>,
}

impl RuleTable {
    pub fn get(&self, family: OsFamily) -> Option<&FamilyRules> {
        self.families.get(&family)
    }

    pub fn insert(&mut self, family: OsFamily, rules: FamilyRules) {
        self.families.insert(family, rules);
    }
}

/// Eligibility table for the legacy VM Import/Export fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmImportRules {
    /// Whether Windows is globally eligible for VM Import/Export.
    #[serde(default)]
    pub windows: bool,

    /// Linux families eligible for VM Import/Export.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub linux_families: Vec<OsFamily>,
}

impl VmImportRules {
    /// Whether `family` can fall back to the legacy import path.
    pub fn supports(&self, family: OsFamily) -> bool {
        if family.is_windows() {
            return self.windows;
        }
        self.linux_families.contains(&family)
    }
}
