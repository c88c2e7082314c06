//! The aggregate project record.

use serde::{Deserialize, Serialize};

use crate::client_update::ClientUpdate;
use crate::communications::{DriveFile, Email};
use crate::daily_log::DailyLog;
use crate::expense::Expense;
use crate::inspection::InspectionRequest;
use crate::invoicing::InvoiceState;
use crate::report::CustomReport;
use crate::rfi::ManagedRfi;
use crate::risk::{Meeting, RiskItem};
use crate::time_entry::TimeEntry;

/// RFI tracking state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RfiManagerState {
    pub managed_rfis: Vec<ManagedRfi>,
}

/// Risk register state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskManagementState {
    pub risks: Vec<RiskItem>,
    pub meetings: Vec<Meeting>,
}

/// A construction project and every tool-specific collection hanging off it.
///
/// The reporting core reads these collections through a shared reference and
/// never mutates them; the only mutation paths in this crate are the
/// custom-report store operations in `report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,

    pub name: String,

    pub address: String,

    pub client_name: String,

    /// Contacts from the company CRM attached to this project.
    #[serde(default)]
    pub contact_ids: Vec<String>,

    #[serde(default)]
    pub rfi_manager: RfiManagerState,

    #[serde(default)]
    pub inspections: Vec<InspectionRequest>,

    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,

    #[serde(default)]
    pub email: Vec<Email>,

    #[serde(default)]
    pub drive: Vec<DriveFile>,

    #[serde(default)]
    pub invoicing: InvoiceState,

    #[serde(default)]
    pub risk_management: RiskManagementState,

    #[serde(default)]
    pub client_updates: Vec<ClientUpdate>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub custom_reports: Vec<CustomReport>,

    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

impl Project {
    /// Creates an empty project with the given intake data.
    pub fn new(id: &str, name: &str, address: &str, client_name: &str) -> Self {
        Project {
            id: id.to_string(),
            name: name.to_string(),
            address: address.to_string(),
            client_name: client_name.to_string(),
            contact_ids: Vec::new(),
            rfi_manager: RfiManagerState::default(),
            inspections: Vec::new(),
            daily_logs: Vec::new(),
            email: Vec::new(),
            drive: Vec::new(),
            invoicing: InvoiceState::default(),
            risk_management: RiskManagementState::default(),
            client_updates: Vec::new(),
            expenses: Vec::new(),
            custom_reports: Vec::new(),
            time_entries: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_project_is_empty() {
        let project = Project::new("proj-1", "Midtown Office", "456 Commerce St", "Innovate Corp.");
        assert_eq!(project.id, "proj-1");
        assert!(project.expenses.is_empty());
        assert!(project.rfi_manager.managed_rfis.is_empty());
        assert!(project.invoicing.line_items.is_empty());
    }

    #[test]
    fn project_round_trips_through_json() {
        let project = crate::sample::sample_project();
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn missing_collections_default_when_deserializing() {
        let json = r#"{
            "id": "proj-2",
            "name": "Bare",
            "address": "nowhere",
            "client_name": "Nobody"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.daily_logs.is_empty());
        assert!(project.custom_reports.is_empty());
        assert_eq!(project.invoicing.application_number, 1);
    }
}
