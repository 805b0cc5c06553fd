//! Semantic validation for rule tables.
//!
//! A malformed table is a configuration error surfaced at startup; the
//! engine assumes it only ever sees a validated table. Errors carry the
//! offending family/field path so the operator can fix the rule file the
//! external loader read it from.

use thiserror::Error;

use crate::ruleset::{FamilyChecks, RuleTable, VersionRange, VmImportRules};
use vmt_common::OsFamily;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Rule-table validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid range for {field}: low {low} exceeds high {high}")]
    InvertedRange { field: String, low: f64, high: f64 },

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Semantic validation failed: {0}")]
    SemanticError(String),
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::InvertedRange { .. } => 60,
            ValidationError::InvalidValue { .. } => 61,
            ValidationError::SemanticError(_) => 62,
        }
    }
}

/// Validate a full rule table semantically.
pub fn validate_rule_table(table: &RuleTable) -> ValidationResult<()> {
    for (family, rules) in &table.families {
        for (version, special) in &rules.special_rules {
            if special.min_service_pack == 0 {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.special_rules.{}.min_service_pack", family, version),
                    message: "Must be at least 1 (SP1)".to_string(),
                });
            }
        }

        match &rules.checks {
            FamilyChecks::Windows {
                server_supported_range,
                client_supported,
                conditional,
            } => {
                if !family.is_windows() {
                    return Err(ValidationError::SemanticError(format!(
                        "Family {} carries windows-shaped checks",
                        family
                    )));
                }
                if let Some(range) = server_supported_range {
                    validate_range(&format!("{}.server_supported_range", family), range)?;
                }
                validate_versions(&format!("{}.client_supported", family), client_supported)?;
                validate_versions(&format!("{}.conditional", family), conditional)?;
            }
            FamilyChecks::Linux {
                supported_range,
                supported_minor_ranges,
                conditional,
            } => {
                if family.is_windows() {
                    return Err(ValidationError::SemanticError(
                        "Family windows carries linux-shaped checks".to_string(),
                    ));
                }
                if let Some(range) = supported_range {
                    validate_range(&format!("{}.supported_range", family), range)?;
                }
                for (i, range) in supported_minor_ranges.iter().enumerate() {
                    validate_range(&format!("{}.supported_minor_ranges[{}]", family, i), range)?;
                }
                validate_versions(&format!("{}.conditional", family), conditional)?;
            }
        }
    }

    Ok(())
}

/// Validate the VM Import/Export eligibility table.
pub fn validate_import_rules(import: &VmImportRules) -> ValidationResult<()> {
    if import.linux_families.contains(&OsFamily::Windows) {
        return Err(ValidationError::SemanticError(
            "linux_families must not list windows; use the windows flag".to_string(),
        ));
    }

    let mut seen = std::collections::BTreeSet::new();
    for family in &import.linux_families {
        if !seen.insert(family) {
            return Err(ValidationError::SemanticError(format!(
                "linux_families lists {} more than once",
                family
            )));
        }
    }

    Ok(())
}

fn validate_range(field: &str, range: &VersionRange) -> ValidationResult<()> {
    if !range.low.is_finite() || !range.high.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: "Bounds must be finite".to_string(),
        });
    }
    if range.low < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: format!("Low bound must be non-negative, got {}", range.low),
        });
    }
    if range.low > range.high {
        return Err(ValidationError::InvertedRange {
            field: field.to_string(),
            low: range.low,
            high: range.high,
        });
    }
    Ok(())
}

fn validate_versions(field: &str, versions: &[f64]) -> ValidationResult<()> {
    for v in versions {
        if !v.is_finite() || *v < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                message: format!("Versions must be finite and non-negative, got {}", v),
            });
        }
    }
    Ok(())
}
