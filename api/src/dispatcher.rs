//! Fire-and-forget notification dispatch.
//!
//! An unbounded channel feeds a worker loop spawned at startup. Scheduling
//! never blocks the request and task outcomes never reach the caller:
//! composition and delivery failures are logged at this boundary and dropped.
//! Each job is spawned from the loop, so jobs from different requests run
//! concurrently; the two deliveries of a quote job run concurrently too.

use std::sync::Arc;

use mailer::Mailer;
use quote_writer::{fallback_quote_email, EmailComposer};
use standeal_core::{ContactMessage, TransportQuote};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

/// A scheduled unit of work: compose and send the emails for one stored record.
#[derive(Debug, Clone)]
pub enum Notification {
    Quote(TransportQuote),
    Contact(ContactMessage),
}

#[derive(Clone)]
pub struct NotificationDispatcher {
    tx: mpsc::UnboundedSender<Notification>,
}

impl NotificationDispatcher {
    /// Spawns the worker loop and returns the scheduling handle.
    /// `composer` is optional: without a text-generation collaborator, quote
    /// emails use the fixed fallback template directly.
    pub fn spawn(
        mailer: Arc<dyn Mailer>,
        composer: Option<Arc<dyn EmailComposer>>,
        contact_email: String,
    ) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<Notification>();
        let worker = Worker {
            mailer,
            composer,
            contact_email,
        };

        tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let worker = worker.clone();
                tokio::spawn(async move { worker.process(job).await });
            }
            debug!("Notification channel closed, worker exiting");
        });

        Self { tx }
    }

    /// Enqueues a job. Never blocks and never fails the caller; a closed
    /// channel is logged and the job dropped.
    pub fn schedule(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            error!("Notification worker is gone, dropping scheduled task");
        }
    }
}

#[derive(Clone)]
struct Worker {
    mailer: Arc<dyn Mailer>,
    composer: Option<Arc<dyn EmailComposer>>,
    contact_email: String,
}

impl Worker {
    async fn process(&self, job: Notification) {
        match job {
            Notification::Quote(quote) => self.process_quote(quote).await,
            Notification::Contact(contact) => self.process_contact(contact).await,
        }
    }

    /// Composes the body once, then sends it to the company address and as a
    /// confirmation copy to the submitter.
    async fn process_quote(&self, quote: TransportQuote) {
        let body = match &self.composer {
            Some(composer) => match composer.compose_quote_email(&quote).await {
                Ok(body) => body,
                Err(err) => {
                    error!(
                        error = %err,
                        quote_id = %quote.id,
                        "Failed to generate quote email, using fallback template"
                    );
                    fallback_quote_email(&quote)
                }
            },
            None => fallback_quote_email(&quote),
        };

        let company_subject = format!("Nouă cerere de cotație - {}", quote.client_name);
        let client_subject = "Confirmarea primirii cererii de cotație - StanDeal Transport";

        tokio::join!(
            self.deliver(&self.contact_email, &company_subject, &body),
            self.deliver(&quote.email, client_subject, &body),
        );

        info!(quote_id = %quote.id, "Quote notifications processed");
    }

    async fn process_contact(&self, contact: ContactMessage) {
        let subject = format!("Nou mesaj de contact - {}", contact.subject);
        let body = contact_email_body(&contact);
        self.deliver(&self.contact_email, &subject, &body).await;
        info!(contact_id = %contact.id, "Contact notification processed");
    }

    async fn deliver(&self, to: &str, subject: &str, body: &str) {
        if let Err(err) = self.mailer.send(to, subject, body).await {
            error!(error = %err, to, subject, "Email delivery failed");
        }
    }
}

/// Fixed template summarizing a contact message for the company inbox.
fn contact_email_body(contact: &ContactMessage) -> String {
    format!(
        "Nou mesaj de contact de pe site-ul standeal.md:\n\n\
         Nume: {}\n\
         Email: {}\n\
         Telefon: {}\n\
         Subiect: {}\n\n\
         Mesaj:\n{}\n\n\
         Data: {}",
        contact.name,
        contact.email,
        contact.phone.as_deref().unwrap_or("-"),
        contact.subject,
        contact.message,
        contact.timestamp,
    )
}
