//! VM Migration Triage common types.
//!
//! This crate provides the vocabulary shared across vmt crates:
//! - Canonical OS family taxonomy
//! - Migration decision, strategy, and risk enums
//! - The immutable per-VM assessment record

pub mod assessment;
pub mod family;

pub use assessment::{Assessment, Decision, Risk, Strategy};
pub use family::OsFamily;
