//! Mail-delivery collaborator behind a narrow trait.
//!
//! [`Mailer`] is the only surface the rest of the service sees.
//! [`SendgridMailer`] delivers through the SendGrid v3 API;
//! [`LogMailer`] logs the email instead of sending, for development and
//! for deployments without a provider key.

mod log_mailer;
mod sendgrid;

use async_trait::async_trait;
use thiserror::Error;

pub use log_mailer::LogMailer;
pub use sendgrid::SendgridMailer;

/// Delivery failed. Never fatal to the triggering request; the dispatcher
/// logs it and moves on.
#[derive(Error, Debug)]
pub enum MailError {
    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("mail provider rejected the message: {status} {body}")]
    Rejected { status: u16, body: String },
}

/// Sends one email. Implementations map to a delivery provider.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError>;
}
