//! Derived-metric reducers for the dashboard, client portal, and risk
//! register.
//!
//! These are not part of the report engine's contract; they are the small
//! single-pass reductions the surrounding screens render directly. They
//! share the engine's conventions: ISO-date strings compared
//! lexicographically, missing values neutral, raw numbers out (currency
//! formatting stays in the presentation layer).

use serde::{Deserialize, Serialize};

use project_model::{
    AgendaItemStatus, InspectionStatus, Project, RfiStatus, RiskStatus, UpdateStatus,
};

/// Headline numbers for the project dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub unread_emails: usize,

    /// RFIs still awaiting an answer (Draft or Sent).
    pub open_rfis: usize,

    /// Inspections not yet performed (Open or Scheduled).
    pub pending_inspections: usize,

    /// Ids of inspections currently in Failed status, for the at-risk panel.
    pub failed_inspection_ids: Vec<String>,

    pub change_order_total: f64,

    pub original_contract_sum: f64,

    pub contract_sum_to_date: f64,

    pub total_billed: f64,

    pub balance_to_finish: f64,

    /// Net manual adjustment applied to billed time this period: the sum of
    /// `this_period - original_this_period_amount` over line items generated
    /// from time entries. Negative when billed time was written down.
    pub billed_time_adjustments: f64,
}

/// Computes the dashboard headline metrics in one pass per collection.
pub fn dashboard_metrics(project: &Project) -> DashboardMetrics {
    let unread_emails = project.email.iter().filter(|e| !e.read).count();
    let open_rfis = project
        .rfi_manager
        .managed_rfis
        .iter()
        .filter(|rfi| matches!(rfi.status, RfiStatus::Sent | RfiStatus::Draft))
        .count();
    let pending_inspections = project
        .inspections
        .iter()
        .filter(|i| matches!(i.status, InspectionStatus::Open | InspectionStatus::Scheduled))
        .count();
    let failed_inspection_ids: Vec<String> = project
        .inspections
        .iter()
        .filter(|i| i.status == InspectionStatus::Failed)
        .map(|i| i.id.clone())
        .collect();

    let change_order_total: f64 = project.invoicing.change_orders.iter().map(|co| co.value).sum();
    let original_contract_sum: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.scheduled_value)
        .sum();
    let contract_sum_to_date = original_contract_sum + change_order_total;
    let total_billed: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.prev_billed + item.this_period)
        .sum();

    let billed_time_adjustments: f64 = project
        .invoicing
        .line_items
        .iter()
        .filter(|item| item.source_time_entry_ids.is_some())
        .filter_map(|item| {
            item.original_this_period_amount
                .map(|original| item.this_period - original)
        })
        .sum();

    DashboardMetrics {
        unread_emails,
        open_rfis,
        pending_inspections,
        failed_inspection_ids,
        change_order_total,
        original_contract_sum,
        contract_sum_to_date,
        total_billed,
        balance_to_finish: contract_sum_to_date - total_billed,
        billed_time_adjustments,
    }
}

/// Progress and contract figures shown on the client portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientPortalSummary {
    pub contract_sum_to_date: f64,

    /// Completed-and-stored work as a percentage of the contract sum to
    /// date, 0 when nothing is on contract yet. Not clamped; the portal
    /// caps the progress bar at 100.
    pub progress_percentage: f64,

    /// Ids of published updates, newest first.
    pub published_update_ids: Vec<String>,
}

/// Computes the client portal summary.
pub fn client_portal_summary(project: &Project) -> ClientPortalSummary {
    let change_order_total: f64 = project.invoicing.change_orders.iter().map(|co| co.value).sum();
    let original_contract_sum: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.scheduled_value)
        .sum();
    let contract_sum_to_date = original_contract_sum + change_order_total;

    let completed_and_stored: f64 = project
        .invoicing
        .line_items
        .iter()
        .map(|item| item.prev_billed + item.this_period + item.stored_materials)
        .sum();
    let progress_percentage = if contract_sum_to_date > 0.0 {
        (completed_and_stored / contract_sum_to_date) * 100.0
    } else {
        0.0
    };

    let mut published: Vec<(&str, &str)> = project
        .client_updates
        .iter()
        .filter(|u| u.status == UpdateStatus::Published)
        .map(|u| (u.publication_date.as_str(), u.id.as_str()))
        .collect();
    published.sort_by(|a, b| b.0.cmp(a.0));

    ClientPortalSummary {
        contract_sum_to_date,
        progress_percentage,
        published_update_ids: published.into_iter().map(|(_, id)| id.to_string()).collect(),
    }
}

/// What produced an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Email,
    File,
}

/// One entry in the merged recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub kind: ActivityKind,

    /// Id of the underlying email or drive file.
    pub id: String,

    /// ISO timestamp the entry sorts by.
    pub timestamp: String,
}

/// Merges unread emails and drive files into one feed, newest first,
/// truncated to `limit` entries.
pub fn recent_activity(project: &Project, limit: usize) -> Vec<ActivityEntry> {
    let mut feed: Vec<ActivityEntry> = project
        .email
        .iter()
        .filter(|e| !e.read)
        .map(|e| ActivityEntry {
            kind: ActivityKind::Email,
            id: e.id.clone(),
            timestamp: e.timestamp.clone(),
        })
        .chain(project.drive.iter().map(|f| ActivityEntry {
            kind: ActivityKind::File,
            id: f.id.clone(),
            timestamp: f.uploaded_at.clone(),
        }))
        .collect();

    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(limit);
    feed
}

/// Triage counts for the risk register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRegisterSummary {
    pub pending: usize,

    /// Accepted or closed risks (the "being managed" bucket).
    pub accepted: usize,

    pub rejected: usize,

    /// Accepted risks whose latest meeting update is not Closed; these form
    /// the agenda for the next risk review.
    pub open_agenda_items: usize,
}

/// Computes the risk register summary.
pub fn risk_register_summary(project: &Project) -> RiskRegisterSummary {
    let risks = &project.risk_management.risks;

    RiskRegisterSummary {
        pending: risks.iter().filter(|r| r.status == RiskStatus::Pending).count(),
        accepted: risks
            .iter()
            .filter(|r| matches!(r.status, RiskStatus::Accepted | RiskStatus::Closed))
            .count(),
        rejected: risks.iter().filter(|r| r.status == RiskStatus::Rejected).count(),
        open_agenda_items: risks
            .iter()
            .filter(|r| r.status == RiskStatus::Accepted)
            .filter(|r| {
                r.latest_update()
                    .map_or(true, |u| u.status != AgendaItemStatus::Closed)
            })
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use project_model::sample_project;

    #[test]
    fn dashboard_counts_and_totals() {
        let project = sample_project();
        let metrics = dashboard_metrics(&project);

        assert_eq!(metrics.unread_emails, 2);
        assert_eq!(metrics.open_rfis, 2);
        assert_eq!(metrics.pending_inspections, 1);
        assert_eq!(metrics.failed_inspection_ids, vec!["insp-2".to_string()]);
        assert_eq!(metrics.change_order_total, 3_000.0);
        assert_eq!(metrics.original_contract_sum, 112_000.0);
        assert_eq!(metrics.contract_sum_to_date, 115_000.0);
        assert_eq!(metrics.total_billed, 49_500.0);
        assert_eq!(metrics.balance_to_finish, 65_500.0);
    }

    #[test]
    fn billed_time_adjustments_only_count_time_sourced_lines() {
        let project = sample_project();
        let metrics = dashboard_metrics(&project);
        // li-3 billed 11,500 against an original 12,000.
        assert_eq!(metrics.billed_time_adjustments, -500.0);
    }

    #[test]
    fn portal_progress_uses_stored_materials() {
        let project = sample_project();
        let summary = client_portal_summary(&project);

        assert_eq!(summary.contract_sum_to_date, 115_000.0);
        // (49,500 + 2,000) / 115,000
        let expected = 51_500.0 / 115_000.0 * 100.0;
        assert!((summary.progress_percentage - expected).abs() < 1e-9);
    }

    #[test]
    fn portal_progress_is_zero_without_a_contract() {
        let project = Project::new("p", "P", "", "");
        let summary = client_portal_summary(&project);
        assert_eq!(summary.progress_percentage, 0.0);
    }

    #[test]
    fn published_updates_sort_newest_first_and_skip_drafts() {
        let project = sample_project();
        let summary = client_portal_summary(&project);
        assert_eq!(
            summary.published_update_ids,
            vec!["upd-2".to_string(), "upd-1".to_string()]
        );
    }

    #[test]
    fn activity_feed_merges_and_sorts_descending() {
        let project = sample_project();
        let feed = recent_activity(&project, 5);

        let ids: Vec<&str> = feed.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["file-3", "email-3", "file-2", "email-2", "file-1"]);
        // Read emails never appear.
        assert!(feed.iter().all(|e| e.id != "email-1"));
    }

    #[test]
    fn activity_feed_truncates_to_limit() {
        let project = sample_project();
        let feed = recent_activity(&project, 2);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed[0].id, "file-3");
        assert_eq!(feed[0].kind, ActivityKind::File);
    }

    #[test]
    fn risk_register_buckets() {
        let project = sample_project();
        let summary = risk_register_summary(&project);

        assert_eq!(summary.pending, 1);
        assert_eq!(summary.accepted, 2);
        assert_eq!(summary.rejected, 1);
        // risk-2 is accepted and still in progress; risk-4's latest update
        // is closed.
        assert_eq!(summary.open_agenda_items, 1);
    }

    #[test]
    fn accepted_risk_with_no_updates_is_an_open_agenda_item() {
        let mut project = sample_project();
        project.risk_management.risks[1].updates.clear();
        let summary = risk_register_summary(&project);
        assert_eq!(summary.open_agenda_items, 1);
    }
}
