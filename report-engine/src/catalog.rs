//! Field catalog - static per-data-source column metadata.
//!
//! The catalog is compiled-in configuration data queried by both the report
//! builder (to populate selectable fields and operators) and the engine (to
//! interpret field references). Ids must only ever come from the catalog
//! itself; passing an id the catalog does not list is a caller bug, and the
//! accessors degrade it to `FieldValue::Empty` rather than failing.

use project_model::{DataSource, DailyLog, Expense, InspectionRequest, ManagedRfi};

use crate::value::FieldValue;

/// Declared type of a catalog field, driving operator choice in the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Number,
    Boolean,
    Date,
}

/// Metadata for one reportable column.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Accessor key into the source record. Unique within a data source.
    pub id: &'static str,

    /// Display name for the builder UI.
    pub label: &'static str,

    pub field_type: FieldType,

    pub filterable: bool,

    pub groupable: bool,

    pub aggregatable: bool,
}

const fn field(
    id: &'static str,
    label: &'static str,
    field_type: FieldType,
    filterable: bool,
    groupable: bool,
    aggregatable: bool,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        label,
        field_type,
        filterable,
        groupable,
        aggregatable,
    }
}

const EXPENSE_FIELDS: &[FieldDescriptor] = &[
    field("date", "Date", FieldType::Date, true, true, false),
    field("vendor", "Vendor", FieldType::Text, true, true, false),
    field("amount", "Amount", FieldType::Number, true, false, true),
    field("category", "Category", FieldType::Text, true, true, false),
    field("description", "Description", FieldType::Text, true, false, false),
    field("invoicable", "Billable", FieldType::Boolean, true, true, false),
    field("status", "Status", FieldType::Text, true, true, false),
];

const DAILY_LOG_FIELDS: &[FieldDescriptor] = &[
    field("date", "Date", FieldType::Date, true, true, false),
    field("notes", "Notes", FieldType::Text, true, false, false),
    field("status", "Status", FieldType::Text, true, true, false),
];

const RFI_FIELDS: &[FieldDescriptor] = &[
    field("subject", "Subject", FieldType::Text, true, false, false),
    field("question", "Question", FieldType::Text, true, false, false),
    field("status", "Status", FieldType::Text, true, true, false),
    field("answer", "Answer", FieldType::Text, true, false, false),
];

const INSPECTION_FIELDS: &[FieldDescriptor] = &[
    field("inspection_number", "Number", FieldType::Number, true, false, true),
    field("inspection_type", "Type", FieldType::Text, true, true, false),
    field("recipient_name", "Inspector", FieldType::Text, true, true, false),
    field("requested_date", "Requested Date", FieldType::Date, true, false, false),
    field("scheduled_date", "Scheduled Date", FieldType::Date, true, false, false),
    field("status", "Status", FieldType::Text, true, true, false),
    field("is_signed", "Signed", FieldType::Boolean, true, true, false),
];

/// The field list for a data source.
pub fn fields_for(source: DataSource) -> &'static [FieldDescriptor] {
    match source {
        DataSource::Expenses => EXPENSE_FIELDS,
        DataSource::DailyLogs => DAILY_LOG_FIELDS,
        DataSource::RfiManager => RFI_FIELDS,
        DataSource::Inspections => INSPECTION_FIELDS,
    }
}

/// Looks up a field descriptor by id within a data source.
pub fn descriptor(source: DataSource, id: &str) -> Option<&'static FieldDescriptor> {
    fields_for(source).iter().find(|f| f.id == id)
}

/// Typed field access for a reportable record.
///
/// Each implementation is the per-data-source accessor table: an exhaustive
/// match from catalog id to the typed value of that field. Ids the catalog
/// does not list yield `Empty`.
pub trait SourceRecord {
    fn field(&self, id: &str) -> FieldValue;
}

impl SourceRecord for Expense {
    fn field(&self, id: &str) -> FieldValue {
        match id {
            "date" => FieldValue::Date(self.date.clone()),
            "vendor" => FieldValue::Text(self.vendor.clone()),
            "amount" => FieldValue::Number(self.amount),
            "category" => FieldValue::Text(self.category.as_str().to_string()),
            "description" => FieldValue::Text(self.description.clone()),
            "invoicable" => FieldValue::Boolean(self.invoicable),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            _ => FieldValue::Empty,
        }
    }
}

impl SourceRecord for DailyLog {
    fn field(&self, id: &str) -> FieldValue {
        match id {
            "date" => FieldValue::Date(self.date.clone()),
            "notes" => FieldValue::Text(self.notes.clone()),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            _ => FieldValue::Empty,
        }
    }
}

impl SourceRecord for ManagedRfi {
    fn field(&self, id: &str) -> FieldValue {
        match id {
            "subject" => FieldValue::Text(self.subject.clone()),
            "question" => FieldValue::Text(self.question.clone()),
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "answer" => self.answer.clone().into(),
            _ => FieldValue::Empty,
        }
    }
}

impl SourceRecord for InspectionRequest {
    fn field(&self, id: &str) -> FieldValue {
        match id {
            "inspection_number" => FieldValue::Number(self.inspection_number as f64),
            "inspection_type" => FieldValue::Text(self.inspection_type.clone()),
            "recipient_name" => FieldValue::Text(self.recipient_name.clone()),
            "requested_date" => FieldValue::Date(self.requested_date.clone()),
            "scheduled_date" => match &self.scheduled_date {
                Some(d) => FieldValue::Date(d.clone()),
                None => FieldValue::Empty,
            },
            "status" => FieldValue::Text(self.status.as_str().to_string()),
            "is_signed" => FieldValue::Boolean(self.is_signed),
            _ => FieldValue::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_model::sample_project;

    const ALL_SOURCES: [DataSource; 4] = [
        DataSource::Expenses,
        DataSource::DailyLogs,
        DataSource::RfiManager,
        DataSource::Inspections,
    ];

    #[test]
    fn field_ids_are_unique_per_source() {
        for source in ALL_SOURCES {
            let fields = fields_for(source);
            for (i, a) in fields.iter().enumerate() {
                for b in &fields[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id in {:?}", source);
                }
            }
        }
    }

    #[test]
    fn aggregatable_fields_are_numeric() {
        for source in ALL_SOURCES {
            for f in fields_for(source) {
                if f.aggregatable {
                    assert_eq!(f.field_type, FieldType::Number, "{:?}/{}", source, f.id);
                }
            }
        }
    }

    #[test]
    fn every_cataloged_id_resolves_on_a_populated_record() {
        let project = sample_project();

        for f in fields_for(DataSource::Expenses) {
            assert!(!project.expenses[0].field(f.id).is_empty(), "expenses.{}", f.id);
        }
        for f in fields_for(DataSource::DailyLogs) {
            assert!(!project.daily_logs[0].field(f.id).is_empty(), "daily_logs.{}", f.id);
        }
        for f in fields_for(DataSource::RfiManager) {
            // rfi-2 has an answer, so every field is populated on it
            assert!(
                !project.rfi_manager.managed_rfis[1].field(f.id).is_empty(),
                "rfi_manager.{}",
                f.id
            );
        }
        for f in fields_for(DataSource::Inspections) {
            assert!(
                !project.inspections[0].field(f.id).is_empty(),
                "inspections.{}",
                f.id
            );
        }
    }

    #[test]
    fn unknown_id_yields_empty() {
        let project = sample_project();
        assert!(project.expenses[0].field("no_such_field").is_empty());
    }

    #[test]
    fn accessor_types_match_declared_types() {
        let project = sample_project();
        let expense = &project.expenses[0];
        for f in fields_for(DataSource::Expenses) {
            let value = expense.field(f.id);
            let matches = match f.field_type {
                FieldType::Text => matches!(value, FieldValue::Text(_)),
                FieldType::Number => matches!(value, FieldValue::Number(_)),
                FieldType::Boolean => matches!(value, FieldValue::Boolean(_)),
                FieldType::Date => matches!(value, FieldValue::Date(_)),
            };
            assert!(matches, "expenses.{} returned {:?}", f.id, value);
        }
    }

    #[test]
    fn descriptor_lookup() {
        let amount = descriptor(DataSource::Expenses, "amount").unwrap();
        assert_eq!(amount.label, "Amount");
        assert!(amount.aggregatable);
        assert!(descriptor(DataSource::DailyLogs, "amount").is_none());
    }
}
