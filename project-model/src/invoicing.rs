//! AIA-style progress billing state.

use serde::{Deserialize, Serialize};

/// A line on the schedule of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractLineItem {
    pub id: String,

    /// Display number on the continuation sheet (e.g. "1", "2a").
    pub item_number: String,

    pub description: String,

    /// Scheduled value of this line on the original contract.
    pub scheduled_value: f64,

    /// Amount billed on previous applications.
    pub prev_billed: f64,

    /// Amount billed this period.
    pub this_period: f64,

    /// Value of materials stored on site but not yet installed.
    pub stored_materials: f64,

    /// Expense this line was generated from, for traceability.
    pub source_expense_id: Option<String>,

    /// Time entries this line was generated from.
    pub source_time_entry_ids: Option<Vec<String>>,

    /// The this-period amount before any manual adjustment, kept so
    /// billed-time variance can be computed.
    pub original_this_period_amount: Option<f64>,
}

/// An approved change order affecting the contract sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeOrderItem {
    pub id: String,
    pub description: String,
    /// Signed value; deductive change orders are negative.
    pub value: f64,
}

/// The full invoicing state for a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceState {
    pub application_number: u32,

    /// ISO date the current application bills through.
    pub period_to: String,

    pub architects_project_number: String,

    pub line_items: Vec<ContractLineItem>,

    pub change_orders: Vec<ChangeOrderItem>,

    /// Retainage held on completed work, as a percentage.
    pub retainage_percentage: f64,

    /// Retainage held on stored materials, as a percentage.
    pub materials_retainage_percentage: f64,

    /// Total of certificates previously issued.
    pub previous_payments: f64,
}

impl Default for InvoiceState {
    fn default() -> Self {
        InvoiceState {
            application_number: 1,
            period_to: String::new(),
            architects_project_number: String::new(),
            line_items: Vec::new(),
            change_orders: Vec::new(),
            retainage_percentage: 10.0,
            materials_retainage_percentage: 10.0,
            previous_payments: 0.0,
        }
    }
}
