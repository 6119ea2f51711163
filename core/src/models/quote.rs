//! Transport-quote record and submission payload.
//!
//! Maps to the `transport_quotes` table and is echoed back as the create
//! response body.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// National vs. international transport. Lowercase on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum TransportType {
    National,
    International,
}

impl TransportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::National => "national",
            TransportType::International => "international",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "national" => Ok(TransportType::National),
            "international" => Ok(TransportType::International),
            _ => Err(()),
        }
    }
}

/// How fast the client needs the transport. Lowercase on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Urgent,
    Express,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Urgent => "urgent",
            Urgency::Express => "express",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Urgency::Normal),
            "urgent" => Ok(Urgency::Urgent),
            "express" => Ok(Urgency::Express),
            _ => Err(()),
        }
    }
}

/// A stored transport-quote request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TransportQuote {
    pub id: String,
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub cargo_type: String,
    pub cargo_weight: Option<f64>,
    pub cargo_dimensions: Option<String>,
    pub transport_type: TransportType,
    pub urgency: Urgency,
    pub additional_info: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Client-submitted quote payload. Enum fields arrive as free-form strings so
/// the validation layer, not the JSON decoder, rejects unknown values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportQuoteCreate {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub cargo_type: String,
    #[serde(default)]
    pub cargo_weight: Option<f64>,
    #[serde(default)]
    pub cargo_dimensions: Option<String>,
    pub transport_type: String,
    pub urgency: String,
    #[serde(default)]
    pub additional_info: Option<String>,
}
