//! Report engine - the calculation core that turns a configuration into a
//! result table.
//!
//! `process_report` runs a four-stage pipeline per invocation, with no
//! caching across calls and no mutation of its inputs:
//! 1. Resolve the configured data source to a project collection
//! 2. Filter rows by the conjunction of the configured clauses
//! 3. Project surviving rows onto the selected columns
//! 4. Optionally partition and aggregate into one row per group

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use project_model::{Aggregation, CustomReport, DataSource, FilterClause, FilterOp, Grouping, Project};

use crate::catalog;
use crate::catalog::SourceRecord;
use crate::value::FieldValue;
use crate::view::{ResultRow, ResultTable};

/// Runs a report configuration against a project snapshot.
///
/// Deterministic and side-effect free; an empty source collection produces a
/// well-formed empty table rather than an error.
pub fn process_report(project: &Project, config: &CustomReport) -> ResultTable {
    match config.data_source {
        DataSource::Expenses => run(&project.expenses, config),
        DataSource::DailyLogs => run(&project.daily_logs, config),
        DataSource::RfiManager => run(&project.rfi_manager.managed_rfis, config),
        DataSource::Inspections => run(&project.inspections, config),
    }
}

fn run<R: SourceRecord>(records: &[R], config: &CustomReport) -> ResultTable {
    let survivors: Vec<&R> = records
        .iter()
        .filter(|record| config.filters.iter().all(|clause| clause_passes(clause, *record)))
        .collect();

    if let Some(grouping) = config.grouping.as_ref().filter(|g| !g.field.is_empty()) {
        return group_rows(&survivors, config, grouping);
    }

    let columns = display_columns(config);
    let rows = survivors
        .iter()
        .map(|record| ResultRow::new(columns.iter().map(|column| record.field(column))))
        .collect();

    ResultTable {
        title: config.name.clone(),
        columns,
        rows,
        is_grouped: false,
        grouping: None,
    }
}

/// The columns an ungrouped report renders: the configured selection, or the
/// full catalog field list when nothing was selected (never zero columns
/// against non-empty data).
fn display_columns(config: &CustomReport) -> Vec<String> {
    if config.fields.is_empty() {
        catalog::fields_for(config.data_source)
            .iter()
            .map(|f| f.id.to_string())
            .collect()
    } else {
        config.fields.clone()
    }
}

// ============================================================================
// FILTER EVALUATION
// ============================================================================

/// Evaluates one clause against one record.
///
/// A clause with an empty operand always passes, so a half-built filter in
/// the builder never breaks the report.
fn clause_passes<R: SourceRecord>(clause: &FilterClause, record: &R) -> bool {
    if clause.value.is_empty() {
        return true;
    }

    let value = record.field(&clause.field);
    match clause.operator {
        FilterOp::Equals => equals_operand(&value, clause.value.single()),
        FilterOp::NotEquals => !equals_operand(&value, clause.value.single()),
        FilterOp::Contains => {
            let haystack = value.display().to_lowercase();
            haystack.contains(&clause.value.single().to_lowercase())
        }
        FilterOp::GreaterThan => {
            ordering(&value, clause.value.single()) == Some(Ordering::Greater)
        }
        FilterOp::LessThan => ordering(&value, clause.value.single()) == Some(Ordering::Less),
        FilterOp::IsBetween => {
            let (start, end) = clause.value.range();
            within_range(&value, start, end)
        }
    }
}

/// Equality against a string operand: numeric fields compare numerically,
/// everything else compares its string form case-sensitively. `not_equals`
/// is the exact complement.
fn equals_operand(value: &FieldValue, operand: &str) -> bool {
    match value {
        FieldValue::Number(n) => operand.trim().parse::<f64>().map_or(false, |rhs| *n == rhs),
        other => other.display() == operand,
    }
}

/// Ordering against a string operand: numeric fields parse the operand
/// (unparsable means no ordering, so the clause fails), all other fields
/// compare lexicographically on the string form. ISO dates order
/// chronologically under that rule; plain strings order lexicographically,
/// which is the source behavior and is kept as-is.
fn ordering(value: &FieldValue, operand: &str) -> Option<Ordering> {
    match value {
        FieldValue::Number(n) => {
            let rhs: f64 = operand.trim().parse().ok()?;
            n.partial_cmp(&rhs)
        }
        other => Some(other.display().as_str().cmp(operand)),
    }
}

/// Inclusive range test on the string form. An empty bound leaves that side
/// unbounded, so `["", "2024-01-01"]` means "on or before 2024-01-01".
fn within_range(value: &FieldValue, start: &str, end: &str) -> bool {
    let v = value.display();
    (start.is_empty() || v.as_str() >= start) && (end.is_empty() || v.as_str() <= end)
}

// ============================================================================
// GROUPING / AGGREGATION
// ============================================================================

/// Accumulator for one group: the first-seen key value plus running totals.
struct GroupSlot {
    key: FieldValue,
    sum: f64,
    count: u64,
}

/// Partitions the filtered rows by the group field and emits one row per
/// group, in first-seen order. Output columns become exactly
/// `[field, agg_field]`.
fn group_rows<R: SourceRecord>(
    records: &[&R],
    config: &CustomReport,
    grouping: &Grouping,
) -> ResultTable {
    let mut index: FxHashMap<String, usize> = FxHashMap::default();
    let mut slots: Vec<GroupSlot> = Vec::new();

    for record in records {
        let key_value = record.field(&grouping.field);
        let key = key_value.display();

        let next = slots.len();
        let idx = *index.entry(key).or_insert(next);
        if idx == next {
            slots.push(GroupSlot {
                key: key_value,
                sum: 0.0,
                count: 0,
            });
        }

        let slot = &mut slots[idx];
        slot.count += 1;
        slot.sum += record.field(&grouping.agg_field).coerce_number();
    }

    let rows = slots
        .into_iter()
        .map(|slot| {
            let aggregate = match grouping.aggregation {
                Aggregation::Count => slot.count as f64,
                Aggregation::Sum => slot.sum,
                Aggregation::Avg => {
                    if slot.count > 0 {
                        slot.sum / slot.count as f64
                    } else {
                        0.0
                    }
                }
            };
            ResultRow::new([slot.key, FieldValue::Number(aggregate)])
        })
        .collect();

    ResultTable {
        title: config.name.clone(),
        columns: vec![grouping.field.clone(), grouping.agg_field.clone()],
        rows,
        is_grouped: true,
        grouping: Some(grouping.clone()),
    }
}
