//! Shared domain types for the construction project management core.
//!
//! This crate holds the `Project` record and every collection the reporting
//! core reads, plus the persisted custom-report configuration types. It is
//! plain serializable data: no computation lives here beyond the
//! custom-report store operations on `Project`.
//!
//! Layers:
//! - Domain records: `expense`, `daily_log`, `rfi`, `inspection`,
//!   `invoicing`, `communications`, `client_update`, `risk`, `time_entry`
//! - `report`: persisted report configuration (what a report IS)
//! - `project`: the aggregate record tying the collections together
//! - `sample`: a seeded realistic project for tests and benches

pub mod client_update;
pub mod communications;
pub mod daily_log;
pub mod expense;
pub mod inspection;
pub mod invoicing;
pub mod project;
pub mod report;
pub mod rfi;
pub mod risk;
pub mod sample;
pub mod time_entry;

pub use client_update::{ClientUpdate, ClientUpdateSection, UpdateStatus};
pub use communications::{DriveFile, Email};
pub use daily_log::{DailyLog, DailyLogStatus};
pub use expense::{Expense, ExpenseCategory, ExpenseStatus};
pub use inspection::{AuditLogEntry, InspectionRequest, InspectionStatus};
pub use invoicing::{ChangeOrderItem, ContractLineItem, InvoiceState};
pub use project::{Project, RfiManagerState, RiskManagementState};
pub use report::{
    Aggregation, CustomReport, DataSource, FilterClause, FilterOp, FilterValue, Grouping,
    ReportStoreError,
};
pub use rfi::{ManagedRfi, RfiLogEntry, RfiStatus};
pub use risk::{AgendaItemStatus, AgendaUpdate, Meeting, RiskCategory, RiskItem, RiskSeverity, RiskStatus};
pub use sample::sample_project;
pub use time_entry::{TimeEntry, TimeEntryStatus};
