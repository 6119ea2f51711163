//! Record models for the three persisted kinds plus the static company card.
//!
//! Records are immutable once created: `id` (UUIDv4) and `timestamp` (UTC)
//! are assigned server-side at construction and never change.

mod company;
mod contact;
mod quote;
mod status;

pub use company::CompanyInfo;
pub use contact::{ContactMessage, ContactMessageCreate};
pub use quote::{TransportQuote, TransportQuoteCreate, TransportType, Urgency};
pub use status::{StatusCheck, StatusCheckCreate};
