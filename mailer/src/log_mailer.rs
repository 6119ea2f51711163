//! Log-only mail delivery for development and keyless deployments.

use async_trait::async_trait;
use tracing::info;

use crate::{MailError, Mailer};

/// Logs the email instead of sending it. Always succeeds.
#[derive(Debug, Clone, Default)]
pub struct LogMailer;

impl LogMailer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), MailError> {
        info!(to, subject, body, "EMAIL SENT (log only)");
        Ok(())
    }
}
