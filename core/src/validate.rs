//! Validation layer: turns raw submission payloads into normalized records.
//!
//! Pure functions, no side effects. Required strings must be non-empty after
//! trimming; email fields must look like an address; enum fields must match
//! one of the known values. On success the full record is constructed with a
//! server-assigned id and UTC timestamp.

use std::sync::LazyLock;

use chrono::Utc;
use regex::Regex;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    ContactMessage, ContactMessageCreate, StatusCheck, StatusCheckCreate, TransportQuote,
    TransportQuoteCreate,
};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex"));

/// A rejected submission. Carries the offending field name for the response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid email address in field: {0}")]
    InvalidEmail(&'static str),

    #[error("unknown value for field {field}: {value}")]
    UnknownValue { field: &'static str, value: String },
}

impl ValidationError {
    /// The submitted field this error points at.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(f) => f,
            ValidationError::InvalidEmail(f) => f,
            ValidationError::UnknownValue { field, .. } => field,
        }
    }
}

/// Trims a required field; empty after trimming is an error.
fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Trims an optional field; empty after trimming collapses to None.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Requires valid email syntax on an already-required field.
fn email(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = required(value, field)?;
    if !EMAIL_RE.is_match(&trimmed) {
        return Err(ValidationError::InvalidEmail(field));
    }
    Ok(trimmed)
}

/// Validates a quote submission and builds the stored record.
pub fn transport_quote(payload: &TransportQuoteCreate) -> Result<TransportQuote, ValidationError> {
    let transport_type = payload
        .transport_type
        .trim()
        .parse()
        .map_err(|_| ValidationError::UnknownValue {
            field: "transport_type",
            value: payload.transport_type.clone(),
        })?;
    let urgency = payload
        .urgency
        .trim()
        .parse()
        .map_err(|_| ValidationError::UnknownValue {
            field: "urgency",
            value: payload.urgency.clone(),
        })?;

    Ok(TransportQuote {
        id: Uuid::new_v4().to_string(),
        client_name: required(&payload.client_name, "client_name")?,
        email: email(&payload.email, "email")?,
        phone: required(&payload.phone, "phone")?,
        pickup_location: required(&payload.pickup_location, "pickup_location")?,
        delivery_location: required(&payload.delivery_location, "delivery_location")?,
        cargo_type: required(&payload.cargo_type, "cargo_type")?,
        cargo_weight: payload.cargo_weight,
        cargo_dimensions: optional(payload.cargo_dimensions.as_deref()),
        transport_type,
        urgency,
        additional_info: optional(payload.additional_info.as_deref()),
        timestamp: Utc::now(),
    })
}

/// Validates a contact submission and builds the stored record.
pub fn contact_message(payload: &ContactMessageCreate) -> Result<ContactMessage, ValidationError> {
    Ok(ContactMessage {
        id: Uuid::new_v4().to_string(),
        name: required(&payload.name, "name")?,
        email: email(&payload.email, "email")?,
        phone: optional(payload.phone.as_deref()),
        subject: required(&payload.subject, "subject")?,
        message: required(&payload.message, "message")?,
        timestamp: Utc::now(),
    })
}

/// Validates a status-check submission and builds the stored record.
pub fn status_check(payload: &StatusCheckCreate) -> Result<StatusCheck, ValidationError> {
    Ok(StatusCheck::new(required(
        &payload.client_name,
        "client_name",
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TransportType, Urgency};

    fn quote_payload() -> TransportQuoteCreate {
        TransportQuoteCreate {
            client_name: "Ion Popescu".to_string(),
            email: "ion@example.com".to_string(),
            phone: "068123456".to_string(),
            pickup_location: "Chișinău".to_string(),
            delivery_location: "Iași".to_string(),
            cargo_type: "electronics".to_string(),
            cargo_weight: None,
            cargo_dimensions: None,
            transport_type: "international".to_string(),
            urgency: "urgent".to_string(),
            additional_info: None,
        }
    }

    #[test]
    fn valid_quote_gets_id_and_timestamp() {
        let before = Utc::now();
        let quote = transport_quote(&quote_payload()).expect("valid payload");
        assert!(!quote.id.is_empty());
        assert!(quote.timestamp >= before && quote.timestamp <= Utc::now());
        assert_eq!(quote.transport_type, TransportType::International);
        assert_eq!(quote.urgency, Urgency::Urgent);
        assert_eq!(quote.client_name, "Ion Popescu");
    }

    #[test]
    fn quote_fields_are_trimmed() {
        let mut payload = quote_payload();
        payload.client_name = "  Ion Popescu  ".to_string();
        payload.additional_info = Some("   ".to_string());
        let quote = transport_quote(&payload).expect("valid payload");
        assert_eq!(quote.client_name, "Ion Popescu");
        assert_eq!(quote.additional_info, None);
    }

    #[test]
    fn quote_missing_required_field_fails() {
        let mut payload = quote_payload();
        payload.pickup_location = "  ".to_string();
        let err = transport_quote(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("pickup_location"));
    }

    #[test]
    fn quote_malformed_email_fails() {
        let mut payload = quote_payload();
        payload.email = "not-an-address".to_string();
        let err = transport_quote(&payload).unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail("email"));
        assert_eq!(err.field(), "email");
    }

    #[test]
    fn quote_unknown_transport_type_fails() {
        let mut payload = quote_payload();
        payload.transport_type = "interplanetary".to_string();
        let err = transport_quote(&payload).unwrap_err();
        assert_eq!(
            err,
            ValidationError::UnknownValue {
                field: "transport_type",
                value: "interplanetary".to_string()
            }
        );
    }

    #[test]
    fn quote_unknown_urgency_fails() {
        let mut payload = quote_payload();
        payload.urgency = "yesterday".to_string();
        assert_eq!(
            transport_quote(&payload).unwrap_err().field(),
            "urgency"
        );
    }

    #[test]
    fn contact_empty_message_fails() {
        let payload = ContactMessageCreate {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            phone: None,
            subject: "Întrebare".to_string(),
            message: "".to_string(),
        };
        let err = contact_message(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingField("message"));
    }

    #[test]
    fn contact_optional_phone_is_kept() {
        let payload = ContactMessageCreate {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            phone: Some(" 069000000 ".to_string()),
            subject: "Întrebare".to_string(),
            message: "Bună ziua".to_string(),
        };
        let contact = contact_message(&payload).expect("valid payload");
        assert_eq!(contact.phone.as_deref(), Some("069000000"));
    }

    #[test]
    fn status_check_requires_client_name() {
        let payload = StatusCheckCreate {
            client_name: "".to_string(),
        };
        assert_eq!(
            status_check(&payload).unwrap_err(),
            ValidationError::MissingField("client_name")
        );
    }
}
