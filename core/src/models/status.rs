//! Status-check record and submission payload (minimal health-check records).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored status check. Maps to the `status_checks` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Creates a record with a generated UUID and current UTC timestamp.
    pub fn new(client_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}

/// Client-submitted status-check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
