//! Managed RFI (request for information) records.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an RFI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RfiStatus {
    Draft,
    Sent,
    Answered,
    Closed,
}

impl RfiStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RfiStatus::Draft => "Draft",
            RfiStatus::Sent => "Sent",
            RfiStatus::Answered => "Answered",
            RfiStatus::Closed => "Closed",
        }
    }
}

/// A dated note appended to an RFI's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RfiLogEntry {
    /// ISO timestamp of the note.
    pub timestamp: String,
    pub note: String,
}

/// An RFI under active management.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedRfi {
    pub id: String,

    pub subject: String,

    pub question: String,

    pub status: RfiStatus,

    /// The answer received, once one exists.
    pub answer: Option<String>,

    /// History of notes against this RFI.
    #[serde(default)]
    pub log: Vec<RfiLogEntry>,
}
