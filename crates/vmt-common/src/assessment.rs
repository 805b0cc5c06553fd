//! Migration decision, strategy, and risk vocabulary.
//!
//! An [`Assessment`] is the single output record of the classification
//! engine: one per VM row, constructed once, never mutated, serialized
//! straight to the caller. Wire names are the SCREAMING_SNAKE codes
//! (`MGN_SUPPORTED`, `REHOST`, `LOW`, ...) that downstream consumers key on.
//!
//! `Strategy` is a pure function of `Decision`; there is deliberately no
//! constructor that accepts an independent strategy, so the one-to-one
//! mapping cannot drift.

use serde::{Deserialize, Serialize};

/// Migration feasibility decision for a single VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    /// Supported by the primary rehost tool (AWS MGN).
    MgnSupported,
    /// Supported, but deprecating or requiring an upgrade soon.
    MgnSupportedWithCondition,
    /// Not supported by MGN; the legacy VM Import/Export path applies.
    VmImportExport,
    /// OS recognized but unusable as-is (e.g. version missing).
    ActionRequired,
    /// Cannot be determined automatically; a human must look.
    NeedsReview,
    /// No rehost path exists; the workload must be rebuilt.
    RebuildRequired,
}

impl Decision {
    /// All decision variants, in severity order.
    pub fn all() -> &'static [Decision] {
        &[
            Decision::MgnSupported,
            Decision::MgnSupportedWithCondition,
            Decision::VmImportExport,
            Decision::ActionRequired,
            Decision::NeedsReview,
            Decision::RebuildRequired,
        ]
    }

    /// The migration strategy implied by this decision (total mapping).
    pub fn strategy(&self) -> Strategy {
        match self {
            Decision::MgnSupported => Strategy::Rehost,
            Decision::MgnSupportedWithCondition => Strategy::RehostWithUpgrade,
            Decision::VmImportExport => Strategy::LegacyRehost,
            Decision::ActionRequired => Strategy::ManualValidation,
            Decision::NeedsReview => Strategy::ManualCheck,
            Decision::RebuildRequired => Strategy::Replatform,
        }
    }
}

/// Recommended migration action, derived one-to-one from [`Decision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Strategy {
    Rehost,
    RehostWithUpgrade,
    LegacyRehost,
    ManualValidation,
    ManualCheck,
    Replatform,
}

/// Risk grade attached to a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Risk {
    Low,
    Medium,
    High,
    Critical,
    Unknown,
}

/// Immutable classification outcome for one VM row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Migration feasibility decision.
    pub decision: Decision,
    /// Strategy derived from the decision.
    pub strategy: Strategy,
    /// Risk grade.
    pub risk: Risk,
    /// Human-readable explanation of why this decision was reached.
    pub reason: String,
}

impl Assessment {
    /// Build an assessment, deriving the strategy from the decision.
    pub fn new(decision: Decision, risk: Risk, reason: impl Into<String>) -> Self {
        Self {
            decision,
            strategy: decision.strategy(),
            risk,
            reason: reason.into(),
        }
    }
}
