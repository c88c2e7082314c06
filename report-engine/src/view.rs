//! Result table - the renderable output of a report run.
//!
//! Cells carry raw `FieldValue`s; currency/date formatting and column-header
//! casing belong to the presentation layer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use project_model::Grouping;

use crate::value::FieldValue;

/// One output row, with cells aligned positionally to `ResultTable::columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub cells: SmallVec<[FieldValue; 8]>,
}

impl ResultRow {
    pub fn new(cells: impl IntoIterator<Item = FieldValue>) -> Self {
        ResultRow {
            cells: cells.into_iter().collect(),
        }
    }

    /// The cell under a named column, if the column exists in the table.
    pub fn cell<'a>(&'a self, columns: &[String], column: &str) -> Option<&'a FieldValue> {
        let idx = columns.iter().position(|c| c == column)?;
        self.cells.get(idx)
    }
}

/// The tabular result of running a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultTable {
    pub title: String,

    /// Ordered field ids actually rendered.
    pub columns: Vec<String>,

    pub rows: Vec<ResultRow>,

    pub is_grouped: bool,

    /// Echo of the input grouping when the table is grouped.
    pub grouping: Option<Grouping>,
}
