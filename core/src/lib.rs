//! # standeal-core
//!
//! Domain types and validation for the Standeal transport-services backend:
//! record models ([`TransportQuote`], [`ContactMessage`], [`StatusCheck`]),
//! their submission payloads, the validation layer, and tracing initialization.
//! Storage- and transport-agnostic; used by the storage and api crates.

pub mod logger;
pub mod models;
pub mod validate;

pub use logger::init_tracing;
pub use models::{
    CompanyInfo, ContactMessage, ContactMessageCreate, StatusCheck, StatusCheckCreate,
    TransportQuote, TransportQuoteCreate, TransportType, Urgency,
};
pub use validate::ValidationError;
