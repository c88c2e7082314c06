//! A seeded sample project with realistic data across every collection the
//! reporting core reads. Used by tests and benches; the numbers are chosen
//! so derived metrics are easy to verify by hand.

use crate::client_update::{ClientUpdate, ClientUpdateSection, UpdateStatus};
use crate::communications::{DriveFile, Email};
use crate::daily_log::{DailyLog, DailyLogStatus};
use crate::expense::{Expense, ExpenseCategory, ExpenseStatus};
use crate::inspection::{InspectionRequest, InspectionStatus};
use crate::invoicing::{ChangeOrderItem, ContractLineItem, InvoiceState};
use crate::project::Project;
use crate::rfi::{ManagedRfi, RfiStatus};
use crate::risk::{
    AgendaItemStatus, AgendaUpdate, Meeting, RiskCategory, RiskItem, RiskSeverity, RiskStatus,
};
use crate::time_entry::{TimeEntry, TimeEntryStatus};

fn expense(
    id: &str,
    date: &str,
    vendor: &str,
    amount: f64,
    category: ExpenseCategory,
    description: &str,
    invoicable: bool,
    status: ExpenseStatus,
) -> Expense {
    Expense {
        id: id.to_string(),
        date: date.to_string(),
        vendor: vendor.to_string(),
        amount,
        category,
        description: description.to_string(),
        invoicable,
        status,
        source_receipt_id: None,
    }
}

fn line_item(
    id: &str,
    item_number: &str,
    description: &str,
    scheduled_value: f64,
    prev_billed: f64,
    this_period: f64,
    stored_materials: f64,
) -> ContractLineItem {
    ContractLineItem {
        id: id.to_string(),
        item_number: item_number.to_string(),
        description: description.to_string(),
        scheduled_value,
        prev_billed,
        this_period,
        stored_materials,
        source_expense_id: None,
        source_time_entry_ids: None,
        original_this_period_amount: None,
    }
}

/// Builds the "Midtown Office Renovation" sample project.
///
/// Invoicing totals for reference: original contract sum 112,000; net change
/// orders +3,000; billed to date 49,500; completed-and-stored 51,500.
pub fn sample_project() -> Project {
    let mut project = Project::new(
        "proj-sample-123",
        "Midtown Office Renovation",
        "456 Commerce St, Suite 300, Metro City",
        "Innovate Corp.",
    );
    project.contact_ids = vec![
        "contact-sample-1".to_string(),
        "contact-sample-2".to_string(),
        "contact-sample-3".to_string(),
    ];

    project.expenses = vec![
        expense(
            "exp-1",
            "2024-03-04",
            "BuildMart",
            482.50,
            ExpenseCategory::Supplies,
            "Drywall screws and joint compound",
            true,
            ExpenseStatus::Pending,
        ),
        expense(
            "exp-2",
            "2024-03-06",
            "Shell",
            96.40,
            ExpenseCategory::Fuel,
            "Fuel for skid steer",
            false,
            ExpenseStatus::Pending,
        ),
        expense(
            "exp-3",
            "2024-03-12",
            "United Rentals",
            1250.00,
            ExpenseCategory::EquipmentRental,
            "Scissor lift, week 1",
            true,
            ExpenseStatus::Invoiced,
        ),
        expense(
            "exp-4",
            "2024-03-18",
            "BuildMart",
            219.75,
            ExpenseCategory::Supplies,
            "Paint and rollers",
            true,
            ExpenseStatus::Pending,
        ),
        expense(
            "exp-5",
            "2024-03-21",
            "La Taqueria",
            64.20,
            ExpenseCategory::Meals,
            "Crew lunch, inspection day",
            false,
            ExpenseStatus::Pending,
        ),
        expense(
            "exp-6",
            "2024-04-02",
            "Shell",
            88.10,
            ExpenseCategory::Fuel,
            "Fuel for generator",
            false,
            ExpenseStatus::Invoiced,
        ),
    ];

    project.daily_logs = vec![
        DailyLog {
            id: "log-1".to_string(),
            date: "2024-03-04".to_string(),
            notes: "Demo complete in open-plan area. Dumpster swapped.".to_string(),
            status: DailyLogStatus::Draft,
            photo_url: None,
            signed_by: None,
            signed_at: None,
            revision_of: None,
        },
        DailyLog {
            id: "log-2".to_string(),
            date: "2024-03-05".to_string(),
            notes: "Framing crew on site, 6 workers. North partitions laid out.".to_string(),
            status: DailyLogStatus::Signed,
            photo_url: Some("file-1".to_string()),
            signed_by: Some("Project Manager".to_string()),
            signed_at: Some("2024-03-05T17:32:00Z".to_string()),
            revision_of: None,
        },
        DailyLog {
            id: "log-3".to_string(),
            date: "2024-03-06".to_string(),
            notes: "Electrician rough-in started. RFI pending on grid conflict.".to_string(),
            status: DailyLogStatus::Draft,
            photo_url: None,
            signed_by: None,
            signed_at: None,
            revision_of: None,
        },
    ];

    project.rfi_manager.managed_rfis = vec![
        ManagedRfi {
            id: "rfi-1".to_string(),
            subject: "Ceiling grid conflict at corridor".to_string(),
            question: "Grid elevation conflicts with new ductwork at gridline C. Confirm ceiling height."
                .to_string(),
            status: RfiStatus::Sent,
            answer: None,
            log: Vec::new(),
        },
        ManagedRfi {
            id: "rfi-2".to_string(),
            subject: "Door hardware spec for suite entry".to_string(),
            question: "Spec section 08 71 00 lists two lever styles. Which applies to door 301?"
                .to_string(),
            status: RfiStatus::Answered,
            answer: Some("Use the Schlage L-series as scheduled on A-601.".to_string()),
            log: Vec::new(),
        },
        ManagedRfi {
            id: "rfi-3".to_string(),
            subject: "Accent paint color at reception".to_string(),
            question: "Finish schedule shows P-3 but elevation notes P-5. Which governs?".to_string(),
            status: RfiStatus::Draft,
            answer: None,
            log: Vec::new(),
        },
    ];

    project.inspections = vec![
        InspectionRequest {
            id: "insp-1".to_string(),
            inspection_number: 1,
            inspection_type: "Rough Electrical".to_string(),
            recipient_name: "John Carter".to_string(),
            recipient_email: "jcarter@cityinspections.gov".to_string(),
            requested_date: "2024-03-14".to_string(),
            scheduled_date: Some("2024-03-15".to_string()),
            status: InspectionStatus::Passed,
            outcome_notes: Some("Passed, no corrections.".to_string()),
            related_inspection_id: None,
            is_signed: true,
            audit_log: Vec::new(),
        },
        InspectionRequest {
            id: "insp-2".to_string(),
            inspection_number: 2,
            inspection_type: "Rough Plumbing".to_string(),
            recipient_name: "John Carter".to_string(),
            recipient_email: "jcarter@cityinspections.gov".to_string(),
            requested_date: "2024-03-20".to_string(),
            scheduled_date: Some("2024-03-21".to_string()),
            status: InspectionStatus::Failed,
            outcome_notes: Some("Missing nail plates at stud penetrations.".to_string()),
            related_inspection_id: None,
            is_signed: true,
            audit_log: Vec::new(),
        },
        InspectionRequest {
            id: "insp-3".to_string(),
            inspection_number: 3,
            inspection_type: "Rough Plumbing".to_string(),
            recipient_name: "John Carter".to_string(),
            recipient_email: "jcarter@cityinspections.gov".to_string(),
            requested_date: "2024-03-27".to_string(),
            scheduled_date: None,
            status: InspectionStatus::Open,
            outcome_notes: None,
            related_inspection_id: Some("insp-2".to_string()),
            is_signed: false,
            audit_log: Vec::new(),
        },
    ];

    project.email = vec![
        Email {
            id: "email-1".to_string(),
            from: "d.lee@studiodesign.com".to_string(),
            to: None,
            subject: "Revised reflected ceiling plan".to_string(),
            body: "Attached is A-201 rev 2 addressing the corridor grid conflict.".to_string(),
            timestamp: "2024-03-18T08:12:00Z".to_string(),
            read: true,
        },
        Email {
            id: "email-2".to_string(),
            from: "sarah.chen@innovate.com".to_string(),
            to: None,
            subject: "Kitchenette appliance delivery window".to_string(),
            body: "Appliances arrive the week of April 8. Will rough-in be done?".to_string(),
            timestamp: "2024-03-20T14:05:00Z".to_string(),
            read: false,
        },
        Email {
            id: "email-3".to_string(),
            from: "mike@powerelectric.net".to_string(),
            to: None,
            subject: "Panel schedule question".to_string(),
            body: "Circuit 14 shows two homeruns on E-1. Please confirm.".to_string(),
            timestamp: "2024-03-22T09:30:00Z".to_string(),
            read: false,
        },
    ];

    project.drive = vec![
        DriveFile {
            id: "file-1".to_string(),
            name: "A101-Architectural.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            size: 4_820_114,
            folder_path: "/Plans/".to_string(),
            is_locked: false,
            uploaded_at: "2024-03-01T10:00:00Z".to_string(),
            caption: None,
        },
        DriveFile {
            id: "file-2".to_string(),
            name: "inspection-2-report.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            size: 312_558,
            folder_path: "/Inspections/".to_string(),
            is_locked: true,
            uploaded_at: "2024-03-21T16:20:00Z".to_string(),
            caption: Some("Signed failed-inspection record".to_string()),
        },
        DriveFile {
            id: "file-3".to_string(),
            name: "warranty-hvac.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            size: 148_990,
            folder_path: "/Closeout/".to_string(),
            is_locked: false,
            uploaded_at: "2024-03-23T11:00:00Z".to_string(),
            caption: None,
        },
    ];

    project.invoicing = InvoiceState {
        application_number: 3,
        period_to: "2024-03-31".to_string(),
        architects_project_number: "SD-2308".to_string(),
        line_items: vec![
            line_item("li-1", "1", "Demolition and framing", 40_000.0, 15_000.0, 5_000.0, 0.0),
            line_item("li-2", "2", "Drywall and finishes", 60_000.0, 10_000.0, 8_000.0, 2_000.0),
            ContractLineItem {
                source_time_entry_ids: Some(vec!["time-1".to_string(), "time-2".to_string()]),
                original_this_period_amount: Some(12_000.0),
                ..line_item("li-3", "3", "Billable time - March", 12_000.0, 0.0, 11_500.0, 0.0)
            },
        ],
        change_orders: vec![
            ChangeOrderItem {
                id: "co-1".to_string(),
                description: "Added kitchenette plumbing rough-in".to_string(),
                value: 4_500.0,
            },
            ChangeOrderItem {
                id: "co-2".to_string(),
                description: "Deleted window film allowance".to_string(),
                value: -1_500.0,
            },
        ],
        retainage_percentage: 10.0,
        materials_retainage_percentage: 10.0,
        previous_payments: 22_500.0,
    };

    project.client_updates = vec![
        ClientUpdate {
            id: "upd-1".to_string(),
            title: "Demolition complete".to_string(),
            summary: "Existing partitions removed; framing starts Monday.".to_string(),
            publication_date: "2024-03-08".to_string(),
            status: UpdateStatus::Published,
            sections: vec![ClientUpdateSection {
                id: "sec-1".to_string(),
                heading: "This week".to_string(),
                content: "Demo and haul-off finished two days early.".to_string(),
                image_urls: Vec::new(),
            }],
        },
        ClientUpdate {
            id: "upd-2".to_string(),
            title: "Framing and rough-in underway".to_string(),
            summary: "Partitions framed; electrical rough-in passed inspection.".to_string(),
            publication_date: "2024-03-15".to_string(),
            status: UpdateStatus::Published,
            sections: Vec::new(),
        },
        ClientUpdate {
            id: "upd-3".to_string(),
            title: "Drywall progress".to_string(),
            summary: "Draft - do not publish yet.".to_string(),
            publication_date: "2024-03-22".to_string(),
            status: UpdateStatus::Draft,
            sections: Vec::new(),
        },
    ];

    project.risk_management.risks = vec![
        RiskItem {
            id: "risk-1".to_string(),
            description: "Long-lead light fixtures may slip past ceiling close-in".to_string(),
            category: RiskCategory::Schedule,
            severity: RiskSeverity::High,
            mitigation_plan: "Release fixture order this week; stage temporary lighting.".to_string(),
            status: RiskStatus::Pending,
            created_at: "2024-03-10T09:00:00Z".to_string(),
            updates: Vec::new(),
        },
        RiskItem {
            id: "risk-2".to_string(),
            description: "Plumbing re-inspection could delay drywall".to_string(),
            category: RiskCategory::Schedule,
            severity: RiskSeverity::Medium,
            mitigation_plan: "Correct nail plates immediately; request priority slot.".to_string(),
            status: RiskStatus::Accepted,
            created_at: "2024-03-21T17:00:00Z".to_string(),
            updates: vec![AgendaUpdate {
                meeting_id: "meeting-1".to_string(),
                timestamp: "2024-03-22T15:00:00Z".to_string(),
                update_text: "Corrections done; awaiting inspector slot.".to_string(),
                status: AgendaItemStatus::InProgress,
            }],
        },
        RiskItem {
            id: "risk-3".to_string(),
            description: "Client may change reception finish selections".to_string(),
            category: RiskCategory::Budget,
            severity: RiskSeverity::Low,
            mitigation_plan: "Hold finish order until RFI-3 is answered.".to_string(),
            status: RiskStatus::Rejected,
            created_at: "2024-03-12T11:30:00Z".to_string(),
            updates: Vec::new(),
        },
        RiskItem {
            id: "risk-4".to_string(),
            description: "Dumpster permits might lapse mid-demo".to_string(),
            category: RiskCategory::Other,
            severity: RiskSeverity::Low,
            mitigation_plan: "Renewed through April.".to_string(),
            status: RiskStatus::Accepted,
            created_at: "2024-03-02T08:00:00Z".to_string(),
            updates: vec![AgendaUpdate {
                meeting_id: "meeting-1".to_string(),
                timestamp: "2024-03-22T15:10:00Z".to_string(),
                update_text: "Permit renewed; no further action.".to_string(),
                status: AgendaItemStatus::Closed,
            }],
        },
    ];
    project.risk_management.meetings = vec![Meeting {
        id: "meeting-1".to_string(),
        date: "2024-03-22".to_string(),
        title: "Weekly risk review".to_string(),
        attendees: vec!["Project Manager".to_string(), "Superintendent".to_string()],
    }];

    project.time_entries = vec![
        TimeEntry {
            id: "time-1".to_string(),
            employee_id: "contact-sample-3".to_string(),
            date: "2024-03-11".to_string(),
            hours: 8.0,
            cost_code: "16-100".to_string(),
            description: Some("Panel rough-in".to_string()),
            status: TimeEntryStatus::Invoiced,
            invoice_id: Some("li-3".to_string()),
        },
        TimeEntry {
            id: "time-2".to_string(),
            employee_id: "contact-sample-3".to_string(),
            date: "2024-03-12".to_string(),
            hours: 6.0,
            cost_code: "16-100".to_string(),
            description: Some("Branch circuits, north wall".to_string()),
            status: TimeEntryStatus::Invoiced,
            invoice_id: Some("li-3".to_string()),
        },
    ];

    project
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_collections_are_populated() {
        let project = sample_project();
        assert_eq!(project.expenses.len(), 6);
        assert_eq!(project.daily_logs.len(), 3);
        assert_eq!(project.rfi_manager.managed_rfis.len(), 3);
        assert_eq!(project.inspections.len(), 3);
        assert_eq!(project.invoicing.line_items.len(), 3);
        assert_eq!(project.invoicing.change_orders.len(), 2);
        assert_eq!(project.risk_management.risks.len(), 4);
    }

    #[test]
    fn sample_invoicing_totals() {
        let project = sample_project();
        let scheduled: f64 = project
            .invoicing
            .line_items
            .iter()
            .map(|li| li.scheduled_value)
            .sum();
        assert_eq!(scheduled, 112_000.0);

        let net_change: f64 = project.invoicing.change_orders.iter().map(|co| co.value).sum();
        assert_eq!(net_change, 3_000.0);
    }
}
