//! VM Migration Triage rule-table model and validation.
//!
//! This crate provides:
//! - Typed structs for the per-family migration rule tables
//! - Semantic validation surfaced at load time
//! - The built-in production rule set for embedders and tests
//!
//! Rule tables are parsed by an external loader and handed to the engine as
//! the in-memory shapes defined here; this crate never reads files.

pub mod builtin;
pub mod ruleset;
pub mod validate;

pub use builtin::{default_import_rules, default_rule_table};
pub use ruleset::{FamilyChecks, FamilyRules, RuleTable, SpecialRule, VersionRange, VmImportRules};
pub use validate::{validate_import_rules, validate_rule_table, ValidationError, ValidationResult};
