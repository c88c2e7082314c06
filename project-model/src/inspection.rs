//! Inspection request records.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an inspection request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectionStatus {
    Open,
    Scheduled,
    Passed,
    Failed,
    Closed,
}

impl InspectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionStatus::Open => "Open",
            InspectionStatus::Scheduled => "Scheduled",
            InspectionStatus::Passed => "Passed",
            InspectionStatus::Failed => "Failed",
            InspectionStatus::Closed => "Closed",
        }
    }
}

/// One entry in an inspection's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// ISO timestamp of the action.
    pub timestamp: String,
    pub user: String,
    pub action: String,
}

/// A request for a third-party inspection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionRequest {
    pub id: String,

    /// Sequential number within the project.
    pub inspection_number: u32,

    /// What is being inspected (e.g. "Rough Electrical").
    pub inspection_type: String,

    pub recipient_name: String,

    pub recipient_email: String,

    /// ISO date the inspection was requested for.
    pub requested_date: String,

    /// ISO date the inspector confirmed, once scheduled.
    pub scheduled_date: Option<String>,

    pub status: InspectionStatus,

    /// Inspector's notes on pass/fail.
    pub outcome_notes: Option<String>,

    /// Links a follow-up request to the failed one it re-inspects.
    pub related_inspection_id: Option<String>,

    pub is_signed: bool,

    #[serde(default)]
    pub audit_log: Vec<AuditLogEntry>,
}
