//! Dynamic field values.
//!
//! Every stage of the pipeline works over `FieldValue`: the accessor tables
//! in `catalog` produce them, the filter executor compares them, and the
//! result rows carry them out raw (formatting is the presentation layer's
//! job). `Empty` is the neutral element everywhere: 0 for sums, "" for
//! string comparisons.

use serde::{Deserialize, Serialize};

/// A single field value read out of a source record.
///
/// Dates stay ISO-8601 strings (`YYYY-MM-DD`), which order correctly under
/// plain lexicographic comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Date(String),
}

impl FieldValue {
    /// The numeric reading of the value, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric coercion for aggregation: missing/non-numeric counts as 0.
    pub fn coerce_number(&self) -> f64 {
        self.as_number().unwrap_or(0.0)
    }

    /// The string form used for substring tests, ordering on non-numeric
    /// fields, and group keys.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Empty => String::new(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Boolean(b) => {
                if *b {
                    "true".to_string()
                } else {
                    "false".to_string()
                }
            }
            FieldValue::Date(d) => d.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

/// Renders a number without a trailing ".0" for whole values, so group keys
/// and substring tests read like the source data.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => FieldValue::Text(s),
            None => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(FieldValue::Empty.display(), "");
        assert_eq!(FieldValue::Number(150.0).display(), "150");
        assert_eq!(FieldValue::Number(96.4).display(), "96.4");
        assert_eq!(FieldValue::Text("BuildMart".to_string()).display(), "BuildMart");
        assert_eq!(FieldValue::Boolean(true).display(), "true");
        assert_eq!(FieldValue::Date("2024-03-04".to_string()).display(), "2024-03-04");
    }

    #[test]
    fn numeric_coercion_is_zero_for_non_numbers() {
        assert_eq!(FieldValue::Number(12.5).coerce_number(), 12.5);
        assert_eq!(FieldValue::Empty.coerce_number(), 0.0);
        assert_eq!(FieldValue::Text("12.5".to_string()).coerce_number(), 0.0);
    }

    #[test]
    fn iso_dates_order_lexicographically() {
        let earlier = FieldValue::Date("2024-01-31".to_string());
        let later = FieldValue::Date("2024-02-01".to_string());
        assert!(earlier.display() < later.display());
    }
}
