//! Batch assessment of VM inventory rows.
//!
//! Upstream collaborators parse spreadsheets into [`VmRecord`] rows; this
//! module classifies each row's guest-OS string and merges the outcome with
//! the row metadata for presentation and export. Rows are independent: one
//! classification per row, order preserved, no shared mutable state.

use serde::{Deserialize, Serialize};

use crate::classify::Classifier;
use vmt_common::{Assessment, Decision};

/// One VM row as parsed from an inventory export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VmRecord {
    /// VM display name.
    pub vm_name: String,

    /// vCPU count, when the export provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_count: Option<u32>,

    /// Memory in MiB, when the export provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_mb: Option<u64>,

    /// Power state as reported ("poweredOn", "poweredOff").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_state: Option<String>,

    /// Free-text guest-OS description, the engine's input.
    pub guest_os: String,
}

/// A VM row merged with its classification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessedVm {
    #[serde(flatten)]
    pub record: VmRecord,

    #[serde(flatten)]
    pub assessment: Assessment,
}

/// Per-decision counts over an assessed inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventorySummary {
    pub total: usize,
    pub mgn_supported: usize,
    pub mgn_supported_with_condition: usize,
    pub vm_import_export: usize,
    pub action_required: usize,
    pub needs_review: usize,
    pub rebuild_required: usize,
}

impl InventorySummary {
    fn count(&mut self, decision: Decision) {
        self.total += 1;
        match decision {
            Decision::MgnSupported => self.mgn_supported += 1,
            Decision::MgnSupportedWithCondition => self.mgn_supported_with_condition += 1,
            Decision::VmImportExport => self.vm_import_export += 1,
            Decision::ActionRequired => self.action_required += 1,
            Decision::NeedsReview => self.needs_review += 1,
            Decision::RebuildRequired => self.rebuild_required += 1,
        }
    }
}

/// Roll up per-decision counts for dashboard display.
pub fn summarize(assessed: &[AssessedVm]) -> InventorySummary {
    let mut summary = InventorySummary::default();
    for vm in assessed {
        summary.count(vm.assessment.decision);
    }
    summary
}

impl Classifier {
    /// Classify every row of an inventory, preserving row order.
    pub fn assess_inventory(&self, records: &[VmRecord]) -> Vec<AssessedVm> {
        records
            .iter()
            .map(|record| AssessedVm {
                record: record.clone(),
                assessment: self.assess(&record.guest_os),
            })
            .collect()
    }
}
