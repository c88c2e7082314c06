//! Time tracking records.

use serde::{Deserialize, Serialize};

/// Approval/billing state of a time entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeEntryStatus {
    Draft,
    Pending,
    Approved,
    Rejected,
    Invoiced,
}

/// Hours logged by an employee against a cost code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,

    /// Id of the employee in the company contact list.
    pub employee_id: String,

    /// ISO date (YYYY-MM-DD) the hours were worked.
    pub date: String,

    pub hours: f64,

    pub cost_code: String,

    pub description: Option<String>,

    pub status: TimeEntryStatus,

    /// Set once the entry has been pulled onto an invoice.
    pub invoice_id: Option<String>,
}
