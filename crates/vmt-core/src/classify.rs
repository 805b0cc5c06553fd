//! The migration decision engine.
//!
//! [`classify`] is a pure, total function: any string input maps to exactly
//! one [`Assessment`], never a panic or an error. Ambiguous inputs become
//! review decisions, not failures, because classification must complete for
//! every row of an arbitrary inventory export.
//!
//! Evaluation precedence, first matching branch wins:
//!
//! 1. 32-bit hard block (raw string, before normalization)
//! 2. Unknown family
//! 3. Missing version
//! 4. Missing rule entry for the family
//! 5. Special per-version rules (service-pack gates), all families
//! 6. Windows server/client checks
//! 7. Linux minor-range, major-range, conditional checks
//! 8. VM Import/Export fallback

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::family::resolve_family;
use crate::normalize::normalize;
use crate::version::{extract_service_pack, extract_version};
use vmt_common::{Assessment, Decision, OsFamily, Risk};
use vmt_rules::{
    validate_import_rules, validate_rule_table, FamilyChecks, FamilyRules, RuleTable,
    ValidationError, VmImportRules,
};

/// Canonical tuple derived from one guest-OS string.
///
/// Ephemeral: derived per call, never stored. Every field is optional
/// because absence is a normal outcome the engine turns into a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OsDescriptor {
    /// Canonical family, `None` when no keyword matched.
    pub family: Option<OsFamily>,
    /// Numeric version on the fractional scale, `None` when no numeral found.
    pub version: Option<f64>,
    /// Service-pack level, `None` when not present in the string.
    pub service_pack: Option<u32>,
}

impl OsDescriptor {
    /// Derive the full descriptor from a raw guest-OS string.
    pub fn from_raw(raw: &str) -> Self {
        let normalized = normalize(raw);
        Self {
            family: resolve_family(&normalized),
            version: extract_version(&normalized),
            service_pack: extract_service_pack(&normalized),
        }
    }
}

/// Classify one guest-OS string against the supplied rule tables.
pub fn classify(raw: &str, rules: &RuleTable, import: &VmImportRules) -> Assessment {
    let raw_lower = raw.to_lowercase();

    // Hard block runs on the raw string: normalization would strip the
    // very token it looks for.
    if raw_lower.contains("32-bit") && !raw_lower.contains("windows") {
        return Assessment::new(
            Decision::RebuildRequired,
            Risk::Critical,
            "32-bit Linux is not supported",
        );
    }

    let normalized = normalize(raw);

    let Some(family) = resolve_family(&normalized) else {
        debug!(os = raw, "no family keyword matched");
        return Assessment::new(Decision::NeedsReview, Risk::Critical, "Unknown OS");
    };

    let Some(version) = extract_version(&normalized) else {
        debug!(os = raw, family = %family, "family resolved but version missing");
        return Assessment::new(
            Decision::ActionRequired,
            Risk::High,
            "OS detected but version missing",
        );
    };

    debug!(os = raw, family = %family, version, "descriptor resolved");

    let Some(family_rules) = rules.get(family) else {
        return Assessment::new(Decision::NeedsReview, Risk::High, "No rules found for this OS");
    };

    // Special rules short-circuit everything below, Windows included.
    if let Some(special) = family_rules.special_rule_for(version) {
        return apply_special_rule(family, version, special.min_service_pack, &normalized);
    }

    match &family_rules.checks {
        FamilyChecks::Windows {
            server_supported_range,
            client_supported,
            conditional,
        } => {
            // Server-class detection is disjoint by construction: any
            // year-style version (>= 2000) is server regardless of wording.
            let is_server = raw_lower.contains("server") || version >= 2000.0;

            if is_server {
                if let Some(range) = server_supported_range {
                    if range.contains(version) {
                        return Assessment::new(
                            Decision::MgnSupported,
                            Risk::Low,
                            "Supported Windows Server",
                        );
                    }
                }
            } else if client_supported.contains(&version) {
                return Assessment::new(
                    Decision::MgnSupported,
                    Risk::Low,
                    "Supported Windows Client",
                );
            }

            if conditional.contains(&version) {
                return Assessment::new(
                    Decision::MgnSupportedWithCondition,
                    Risk::Medium,
                    "Older Windows — upgrade recommended",
                );
            }

            Assessment::new(
                Decision::VmImportExport,
                Risk::High,
                "Not supported by MGN — use VM Import/Export",
            )
        }
        FamilyChecks::Linux {
            supported_range,
            supported_minor_ranges,
            conditional,
        } => {
            // Minor bands are checked before the coarse range.
            for range in supported_minor_ranges {
                if range.contains(version) {
                    return Assessment::new(Decision::MgnSupported, Risk::Low, "Supported by AWS MGN");
                }
            }

            if let Some(range) = supported_range {
                if range.contains(version) {
                    return Assessment::new(Decision::MgnSupported, Risk::Low, "Supported by AWS MGN");
                }
            }

            if conditional.contains(&version) {
                return Assessment::new(
                    Decision::MgnSupportedWithCondition,
                    Risk::Medium,
                    "Supported but nearing deprecation",
                );
            }

            fallback(family, import)
        }
    }
}

/// Evaluate a service-pack gate for `family`/`version`.
fn apply_special_rule(
    family: OsFamily,
    version: f64,
    min_sp: u32,
    normalized: &str,
) -> Assessment {
    let release = version.trunc() as u32;

    match extract_service_pack(normalized) {
        None => Assessment::new(
            Decision::NeedsReview,
            Risk::High,
            format!(
                "{} {} requires SP{}+ — service pack not detected",
                family.label(),
                release,
                min_sp
            ),
        ),
        Some(sp) if sp < min_sp => Assessment::new(
            Decision::RebuildRequired,
            Risk::Critical,
            format!("{} {} SP{} is not supported", family.label(), release, sp),
        ),
        Some(sp) => Assessment::new(
            Decision::MgnSupported,
            Risk::Low,
            format!("{} {} SP{} supported", family.label(), release, sp),
        ),
    }
}

/// Legacy-import fallback for versions no primary check accepted.
fn fallback(family: OsFamily, import: &VmImportRules) -> Assessment {
    if import.supports(family) {
        Assessment::new(
            Decision::VmImportExport,
            Risk::High,
            "Not supported by MGN — use VM Import/Export",
        )
    } else {
        Assessment::new(
            Decision::NeedsReview,
            Risk::Unknown,
            "Unable to determine migration path",
        )
    }
}

/// Frozen rule tables plus the classification entry points.
///
/// Construction validates both tables, so a `Classifier` only ever exists
/// over well-formed rules; after that it is immutable and freely shareable
/// across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: RuleTable,
    import: VmImportRules,
}

impl Classifier {
    /// Build a classifier over validated rule tables.
    pub fn new(rules: RuleTable, import: VmImportRules) -> Result<Self, ValidationError> {
        validate_rule_table(&rules)?;
        validate_import_rules(&import)?;
        Ok(Self { rules, import })
    }

    /// Classify one guest-OS string.
    pub fn assess(&self, raw: &str) -> Assessment {
        classify(raw, &self.rules, &self.import)
    }

    /// The rule entry for `family`, if configured.
    pub fn family_rules(&self, family: OsFamily) -> Option<&FamilyRules> {
        self.rules.get(family)
    }
}
