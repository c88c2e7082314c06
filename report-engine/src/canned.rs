//! Canned reports - fixed report definitions shipped with the application.
//!
//! Three of the four are ordinary `CustomReport` configurations fed through
//! the generic engine (a canned report is data, not control flow). The
//! financial summary cross-references contract sums, change-order totals,
//! and billing to date across three collections, so it is its own
//! computation rather than a grouped table.

use serde::{Deserialize, Serialize};

use project_model::{
    Aggregation, CustomReport, DataSource, FilterClause, FilterOp, FilterValue, Grouping, Project,
};

use crate::engine::process_report;
use crate::view::ResultTable;

/// The closed set of reports shipped with the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CannedReportId {
    FinancialSummary,
    ExpenseByCategory,
    RfiLog,
    BillableExpenses,
}

impl CannedReportId {
    pub const ALL: [CannedReportId; 4] = [
        CannedReportId::FinancialSummary,
        CannedReportId::ExpenseByCategory,
        CannedReportId::RfiLog,
        CannedReportId::BillableExpenses,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CannedReportId::FinancialSummary => "Project Financial Summary",
            CannedReportId::ExpenseByCategory => "Expense by Category",
            CannedReportId::RfiLog => "Full RFI Log",
            CannedReportId::BillableExpenses => "Uninvoiced Billable Expenses",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CannedReportId::FinancialSummary => {
                "High-level overview of contract value, change orders, and expenses."
            }
            CannedReportId::ExpenseByCategory => "Total spending grouped by expense category.",
            CannedReportId::RfiLog => "A complete list of all RFIs and their current status.",
            CannedReportId::BillableExpenses => {
                "Actionable list of expenses pending client billing."
            }
        }
    }
}

/// The output of a canned report run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CannedReport {
    Table(ResultTable),
    Financial(FinancialSummary),
}

/// High-level project financials, each figure a direct reduction over the
/// invoicing and expense collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of scheduled values on the original contract.
    pub original_contract_sum: f64,

    /// Net value of approved change orders.
    pub net_change_by_change_orders: f64,

    /// Original contract sum plus change orders.
    pub contract_sum_to_date: f64,

    /// Everything billed across previous periods and this one.
    pub total_billed: f64,

    /// Every expense logged, billable or not.
    pub total_expenses: f64,
}

/// Runs a canned report against a project snapshot.
pub fn run_canned(project: &Project, id: CannedReportId) -> CannedReport {
    match id {
        CannedReportId::FinancialSummary => CannedReport::Financial(financial_summary(project)),
        CannedReportId::ExpenseByCategory => {
            CannedReport::Table(process_report(project, &expense_by_category_config()))
        }
        CannedReportId::RfiLog => CannedReport::Table(process_report(project, &rfi_log_config())),
        CannedReportId::BillableExpenses => {
            CannedReport::Table(process_report(project, &billable_expenses_config()))
        }
    }
}

/// Computes the project financial summary.
pub fn financial_summary(project: &Project) -> FinancialSummary {
    let original_contract_sum: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.scheduled_value)
        .sum();
    let net_change_by_change_orders: f64 =
        project.invoicing.change_orders.iter().map(|co| co.value).sum();
    let total_billed: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.prev_billed + item.this_period)
        .sum();
    let total_expenses: f64 = project.expenses.iter().map(|exp| exp.amount).sum();

    FinancialSummary {
        original_contract_sum,
        net_change_by_change_orders,
        contract_sum_to_date: original_contract_sum + net_change_by_change_orders,
        total_billed,
        total_expenses,
    }
}

fn expense_by_category_config() -> CustomReport {
    CustomReport {
        id: "canned-expense-by-category".to_string(),
        name: "Expense by Category".to_string(),
        data_source: DataSource::Expenses,
        fields: Vec::new(),
        filters: Vec::new(),
        grouping: Some(Grouping {
            field: "category".to_string(),
            aggregation: Aggregation::Sum,
            agg_field: "amount".to_string(),
        }),
    }
}

fn rfi_log_config() -> CustomReport {
    CustomReport {
        id: "canned-rfi-log".to_string(),
        name: "Full RFI Log".to_string(),
        data_source: DataSource::RfiManager,
        fields: Vec::new(),
        filters: Vec::new(),
        grouping: None,
    }
}

fn billable_expenses_config() -> CustomReport {
    CustomReport {
        id: "canned-billable-expenses".to_string(),
        name: "Uninvoiced Billable Expenses".to_string(),
        data_source: DataSource::Expenses,
        fields: vec![
            "date".to_string(),
            "vendor".to_string(),
            "amount".to_string(),
            "category".to_string(),
            "description".to_string(),
        ],
        filters: vec![
            FilterClause {
                id: "canned-billable-1".to_string(),
                field: "invoicable".to_string(),
                operator: FilterOp::Equals,
                value: FilterValue::Single("true".to_string()),
            },
            FilterClause {
                id: "canned-billable-2".to_string(),
                field: "status".to_string(),
                operator: FilterOp::Equals,
                value: FilterValue::Single("Pending".to_string()),
            },
        ],
        grouping: None,
    }
}
