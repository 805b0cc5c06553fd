//! VM Migration Triage core classification engine.
//!
//! This library turns a free-text guest-OS description into a migration
//! assessment:
//! - Text normalization (architecture markers, bracketed notes, marketing
//!   qualifiers)
//! - Canonical family resolution via ordered keyword matching
//! - Version and service-pack extraction, including R2 release handling
//! - The precedence-ordered decision engine over an injected rule table
//! - Batch assessment of VM inventory rows
//!
//! The engine is a pure function over immutable rule tables: no I/O, no
//! global state, safe to call from any number of threads.

pub mod classify;
pub mod family;
pub mod inventory;
pub mod normalize;
pub mod version;

pub use classify::{classify, Classifier, OsDescriptor};
pub use family::resolve_family;
pub use inventory::{AssessedVm, InventorySummary, VmRecord};
pub use normalize::normalize;
pub use version::{extract_service_pack, extract_version};
