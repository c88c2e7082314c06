//! Client portal update records.

use serde::{Deserialize, Serialize};

/// Visibility state of a client update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateStatus {
    Draft,
    Published,
}

/// One section of a client update post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdateSection {
    pub id: String,
    pub heading: String,
    pub content: String,
    /// URLs of project drive images embedded in this section.
    #[serde(default)]
    pub image_urls: Vec<String>,
}

/// A progress update shown on the client portal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientUpdate {
    pub id: String,

    pub title: String,

    pub summary: String,

    /// ISO date the update was (or will be) published.
    pub publication_date: String,

    pub status: UpdateStatus,

    #[serde(default)]
    pub sections: Vec<ClientUpdateSection>,
}
