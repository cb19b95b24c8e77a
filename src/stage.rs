//! Registration-stage classification.
//!
//! Every row maps to exactly one [`Stage`]. The status text is the
//! authoritative signal when present; date fields act as a fallback proxy,
//! since each workflow step populates its date as a side effect.

use serde::{Deserialize, Serialize};

use crate::row::{Row, field};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    NewRegistration,
    JointInspection,
    WorkOrder,
    Install,
    InstallAndInspection,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::NewRegistration,
        Stage::JointInspection,
        Stage::WorkOrder,
        Stage::Install,
        Stage::InstallAndInspection,
    ];

    /// Classifies a row. Total: unrecognized input falls through to
    /// `NewRegistration`.
    ///
    /// Ordered case-insensitive substring tests against the trimmed
    /// "Current Status" field, then date-field presence in reverse workflow
    /// order when the status is blank or unrecognized.
    pub fn classify(row: &Row) -> Stage {
        let status = row.get(field::CURRENT_STATUS).trim().to_lowercase();

        if status.contains("install") && status.contains("inspect") {
            return Stage::InstallAndInspection;
        }
        if status.contains("install") {
            return Stage::Install;
        }
        if status.contains("work order") {
            return Stage::WorkOrder;
        }
        if status.contains("joint inspection") {
            return Stage::JointInspection;
        }
        if status.contains("registration") {
            return Stage::NewRegistration;
        }

        let installed = row.has(field::INSTALLATION_DATE);
        if installed && row.has(field::INSPECTION_DATE) {
            return Stage::InstallAndInspection;
        }
        if installed {
            return Stage::Install;
        }
        if row.has(field::WORK_ORDER_DATE) {
            return Stage::WorkOrder;
        }
        if row.has(field::JOINT_INSPECTION_DATE) {
            return Stage::JointInspection;
        }
        Stage::NewRegistration
    }

    /// GST and invoice tracking apply only once a work order exists.
    pub fn gst_eligible(self) -> bool {
        matches!(
            self,
            Stage::WorkOrder | Stage::Install | Stage::InstallAndInspection
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::NewRegistration => "New Registration",
            Stage::JointInspection => "Joint Inspection",
            Stage::WorkOrder => "Work Order",
            Stage::Install => "Install",
            Stage::InstallAndInspection => "Install & Inspection",
        }
    }
}
