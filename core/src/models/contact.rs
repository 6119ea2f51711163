//! Contact-message record and submission payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored contact-form message. Maps to the `contact_messages` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Client-submitted contact payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}
