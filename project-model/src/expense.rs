//! Expense tracker records.

use serde::{Deserialize, Serialize};

/// Spending category for an expense line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Supplies,
    Fuel,
    Meals,
    #[serde(rename = "Equipment Rental")]
    EquipmentRental,
    Travel,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Supplies => "Supplies",
            ExpenseCategory::Fuel => "Fuel",
            ExpenseCategory::Meals => "Meals",
            ExpenseCategory::EquipmentRental => "Equipment Rental",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }
}

/// Billing state of an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseStatus {
    Pending,
    Invoiced,
}

impl ExpenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Invoiced => "Invoiced",
        }
    }
}

/// A logged project expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,

    /// ISO date (YYYY-MM-DD) the expense was incurred.
    pub date: String,

    pub vendor: String,

    pub amount: f64,

    pub category: ExpenseCategory,

    pub description: String,

    /// Whether this expense can be passed through to the client.
    pub invoicable: bool,

    pub status: ExpenseStatus,

    /// Links to the receipt file in the project drive.
    pub source_receipt_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_to_display_form() {
        let json = serde_json::to_string(&ExpenseCategory::EquipmentRental).unwrap();
        assert_eq!(json, "\"Equipment Rental\"");
        let back: ExpenseCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ExpenseCategory::EquipmentRental);
    }

    #[test]
    fn category_as_str_matches_serde_form() {
        for cat in [
            ExpenseCategory::Supplies,
            ExpenseCategory::Fuel,
            ExpenseCategory::Meals,
            ExpenseCategory::EquipmentRental,
            ExpenseCategory::Travel,
            ExpenseCategory::Other,
        ] {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }
}
