//! Report engine for the construction project management core.
//!
//! This crate turns a project's raw collections and a declarative report
//! configuration into a tabular result ready for rendering. It is a pure
//! filter -> project -> group/aggregate pipeline over one collection at a
//! time: no joins, no caching, no mutation of its inputs.
//!
//! Layers:
//! - `catalog`: Static per-data-source field metadata and typed accessors
//! - `value`: Dynamic field value variant shared by all stages
//! - `engine`: The `process_report` pipeline (HOW we calculate)
//! - `view`: Renderable output for the frontend (WHAT we display)
//! - `canned`: Fixed reports shipped with the application
//! - `metrics`: Derived-metric reducers for dashboard and client portal

pub mod canned;
pub mod catalog;
pub mod engine;
pub mod metrics;
pub mod value;
pub mod view;

pub use canned::{financial_summary, run_canned, CannedReport, CannedReportId, FinancialSummary};
pub use catalog::{fields_for, FieldDescriptor, FieldType, SourceRecord};
pub use engine::process_report;
pub use metrics::{
    client_portal_summary, dashboard_metrics, recent_activity, risk_register_summary,
    ActivityEntry, ActivityKind, ClientPortalSummary, DashboardMetrics, RiskRegisterSummary,
};
pub use value::FieldValue;
pub use view::{ResultRow, ResultTable};
