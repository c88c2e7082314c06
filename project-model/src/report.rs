//! Report configuration - the serializable description of a custom report.
//!
//! These types are persisted as part of the project and describe WHAT a
//! report is: its data source, selected columns, filter clauses, and an
//! optional grouping. The report engine only reads them; the store
//! operations on `Project` at the bottom of this file are the only
//! mutation path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::project::Project;

/// A named project collection the report engine can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataSource {
    Expenses,
    DailyLogs,
    RfiManager,
    Inspections,
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::Expenses
    }
}

/// Supported filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    Equals,
    NotEquals,
    Contains,
    GreaterThan,
    LessThan,
    IsBetween,
}

/// The operand of a filter clause.
///
/// Serialized untagged so the persisted form stays a plain string for
/// single-operand operators and a two-element array for `is_between`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Single(String),
    Range(String, String),
}

impl FilterValue {
    /// An empty operand makes the clause a no-op that passes every row,
    /// so a half-built filter in the UI never breaks the report.
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Single(v) => v.is_empty(),
            FilterValue::Range(start, end) => start.is_empty() && end.is_empty(),
        }
    }

    /// The single operand; for a range this is the start bound.
    pub fn single(&self) -> &str {
        match self {
            FilterValue::Single(v) => v,
            FilterValue::Range(start, _) => start,
        }
    }

    /// The (start, end) bounds; a single value acts as a start-only bound.
    pub fn range(&self) -> (&str, &str) {
        match self {
            FilterValue::Single(v) => (v.as_str(), ""),
            FilterValue::Range(start, end) => (start.as_str(), end.as_str()),
        }
    }
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Single(String::new())
    }
}

/// One filter clause; a report's clauses are combined as a conjunction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub id: String,

    /// Catalog field id the clause tests.
    pub field: String,

    pub operator: FilterOp,

    #[serde(default)]
    pub value: FilterValue,
}

/// Supported aggregation functions for a grouped report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    Count,
    Sum,
    Avg,
}

/// Group-and-summarize configuration; at most one per report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grouping {
    /// Catalog field id rows are partitioned by.
    pub field: String,

    pub aggregation: Aggregation,

    /// Catalog field id the aggregate is computed over.
    /// Ignored when the aggregation is `count`, but still named as the
    /// aggregate column in the output.
    pub agg_field: String,
}

/// A user-authored report configuration, persisted with the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomReport {
    pub id: String,

    pub name: String,

    pub data_source: DataSource,

    /// Ordered catalog field ids to display. Empty means "all fields".
    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default)]
    pub filters: Vec<FilterClause>,

    #[serde(default)]
    pub grouping: Option<Grouping>,
}

/// Errors from the custom-report store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportStoreError {
    #[error("no custom report with id '{0}'")]
    UnknownReport(String),
}

impl Project {
    /// Looks up a saved custom report by id.
    pub fn custom_report(&self, id: &str) -> Option<&CustomReport> {
        self.custom_reports.iter().find(|r| r.id == id)
    }

    /// Saves a custom report, replacing any existing report with the same id.
    pub fn upsert_custom_report(&mut self, report: CustomReport) {
        match self.custom_reports.iter_mut().find(|r| r.id == report.id) {
            Some(existing) => *existing = report,
            None => self.custom_reports.push(report),
        }
    }

    /// Removes a saved custom report.
    pub fn remove_custom_report(&mut self, id: &str) -> Result<(), ReportStoreError> {
        let before = self.custom_reports.len();
        self.custom_reports.retain(|r| r.id != id);
        if self.custom_reports.len() == before {
            return Err(ReportStoreError::UnknownReport(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, name: &str) -> CustomReport {
        CustomReport {
            id: id.to_string(),
            name: name.to_string(),
            data_source: DataSource::Expenses,
            fields: vec!["date".to_string(), "amount".to_string()],
            filters: Vec::new(),
            grouping: None,
        }
    }

    #[test]
    fn filter_value_round_trips_as_string_or_pair() {
        let single = FilterValue::Single("Supplies".to_string());
        let json = serde_json::to_string(&single).unwrap();
        assert_eq!(json, "\"Supplies\"");
        assert_eq!(serde_json::from_str::<FilterValue>(&json).unwrap(), single);

        let range = FilterValue::Range("2024-01-01".to_string(), "2024-01-31".to_string());
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "[\"2024-01-01\",\"2024-01-31\"]");
        assert_eq!(serde_json::from_str::<FilterValue>(&json).unwrap(), range);
    }

    #[test]
    fn empty_values_are_detected() {
        assert!(FilterValue::Single(String::new()).is_empty());
        assert!(FilterValue::Range(String::new(), String::new()).is_empty());
        assert!(!FilterValue::Single("x".to_string()).is_empty());
        assert!(!FilterValue::Range(String::new(), "2024-01-01".to_string()).is_empty());
    }

    #[test]
    fn operators_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&FilterOp::IsBetween).unwrap(),
            "\"is_between\""
        );
        assert_eq!(
            serde_json::to_string(&FilterOp::GreaterThan).unwrap(),
            "\"greater_than\""
        );
        assert_eq!(serde_json::to_string(&Aggregation::Avg).unwrap(), "\"avg\"");
    }

    #[test]
    fn custom_report_round_trips() {
        let config = CustomReport {
            id: "custom-1".to_string(),
            name: "January supplies".to_string(),
            data_source: DataSource::Expenses,
            fields: vec!["date".to_string(), "vendor".to_string(), "amount".to_string()],
            filters: vec![FilterClause {
                id: "filter-1".to_string(),
                field: "date".to_string(),
                operator: FilterOp::IsBetween,
                value: FilterValue::Range("2024-01-01".to_string(), "2024-01-31".to_string()),
            }],
            grouping: Some(Grouping {
                field: "category".to_string(),
                aggregation: Aggregation::Sum,
                agg_field: "amount".to_string(),
            }),
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: CustomReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut project = Project::new("proj-1", "Test", "1 Main St", "Client");
        project.upsert_custom_report(report("r1", "First"));
        project.upsert_custom_report(report("r2", "Second"));
        project.upsert_custom_report(report("r1", "Renamed"));

        assert_eq!(project.custom_reports.len(), 2);
        assert_eq!(project.custom_report("r1").unwrap().name, "Renamed");
        assert_eq!(project.custom_reports[0].id, "r1");
    }

    #[test]
    fn remove_unknown_report_errors() {
        let mut project = Project::new("proj-1", "Test", "1 Main St", "Client");
        project.upsert_custom_report(report("r1", "First"));

        assert_eq!(
            project.remove_custom_report("missing"),
            Err(ReportStoreError::UnknownReport("missing".to_string()))
        );
        assert_eq!(project.remove_custom_report("r1"), Ok(()));
        assert!(project.custom_report("r1").is_none());
    }
}
