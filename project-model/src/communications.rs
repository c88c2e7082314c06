//! Email and project drive records.

use serde::{Deserialize, Serialize};

/// A message in the project inbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub id: String,

    pub from: String,

    /// Recipient for composed messages.
    pub to: Option<String>,

    pub subject: String,

    pub body: String,

    /// ISO timestamp received/sent.
    pub timestamp: String,

    pub read: bool,
}

/// A file stored in the project drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveFile {
    pub id: String,

    pub name: String,

    /// MIME type (e.g. "application/pdf", "image/jpeg").
    pub file_type: String,

    /// Size in bytes.
    pub size: u64,

    /// Folder the file lives in (e.g. "/", "/Inspections/", "/Closeout/").
    pub folder_path: String,

    /// True when the file is a signed record and may not be replaced.
    pub is_locked: bool,

    /// ISO timestamp the file entered the drive.
    pub uploaded_at: String,

    pub caption: Option<String>,
}
