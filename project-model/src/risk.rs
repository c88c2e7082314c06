//! Risk register and meeting records.

use serde::{Deserialize, Serialize};

/// Triage state of a risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskStatus {
    Pending,
    Accepted,
    Rejected,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    Schedule,
    Budget,
    Safety,
    Quality,
    Communication,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskSeverity {
    High,
    Medium,
    Low,
}

/// State of a risk as an agenda item across meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgendaItemStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Carried Over")]
    CarriedOver,
    Closed,
}

/// An update recorded against a risk during a meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgendaUpdate {
    pub meeting_id: String,
    /// ISO timestamp of the update.
    pub timestamp: String,
    pub update_text: String,
    pub status: AgendaItemStatus,
}

/// A risk tracked in the project register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: String,

    pub description: String,

    pub category: RiskCategory,

    pub severity: RiskSeverity,

    pub mitigation_plan: String,

    pub status: RiskStatus,

    /// ISO timestamp the risk was registered.
    pub created_at: String,

    /// Meeting updates, oldest first.
    #[serde(default)]
    pub updates: Vec<AgendaUpdate>,
}

impl RiskItem {
    /// The most recent meeting update, if any.
    pub fn latest_update(&self) -> Option<&AgendaUpdate> {
        self.updates.last()
    }
}

/// A risk review meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: String,
    /// ISO date of the meeting.
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}
