//! Daily log records.

use serde::{Deserialize, Serialize};

/// Whether a daily log has been signed off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DailyLogStatus {
    Draft,
    Signed,
}

impl DailyLogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DailyLogStatus::Draft => "Draft",
            DailyLogStatus::Signed => "Signed",
        }
    }
}

/// A field report for one working day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub id: String,

    /// ISO date (YYYY-MM-DD) the log covers.
    pub date: String,

    pub notes: String,

    pub status: DailyLogStatus,

    /// Path/id of an attached photo in the project drive.
    pub photo_url: Option<String>,

    pub signed_by: Option<String>,

    /// ISO timestamp of the signature, if signed.
    pub signed_at: Option<String>,

    /// ID of the log this one revises, for signed-record corrections.
    pub revision_of: Option<String>,
}
