//! Service binary: env config, storage, collaborators, dispatcher, HTTP server.

use std::sync::Arc;

use anyhow::Result;
use mailer::{LogMailer, Mailer, SendgridMailer};
use quote_writer::{EmailComposer, OpenAiComposer};
use standeal_api::{AppConfig, AppState, NotificationDispatcher};
use storage::RecordStore;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    standeal_core::init_tracing()?;

    let config = AppConfig::load()?;

    let store = RecordStore::connect(&config.database_url).await?;

    let mailer: Arc<dyn Mailer> = match &config.sendgrid_api_key {
        Some(key) => Arc::new(SendgridMailer::new(
            key.clone(),
            config.contact_email.clone(),
        )),
        None => {
            warn!("SENDGRID_API_KEY not set, emails will only be logged");
            Arc::new(LogMailer::new())
        }
    };

    let composer: Option<Arc<dyn EmailComposer>> = config.openai_api_key.as_ref().map(|key| {
        Arc::new(OpenAiComposer::new(key.clone(), config.openai_model.clone()))
            as Arc<dyn EmailComposer>
    });
    if composer.is_none() {
        warn!("OPENAI_API_KEY not set, quote emails use the fixed template");
    }

    let dispatcher =
        NotificationDispatcher::spawn(mailer, composer, config.contact_email.clone());

    let state = AppState {
        store: store.clone(),
        dispatcher,
    };
    let app = standeal_api::router(state, config.cors_layer()?);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!(addr = %config.bind_addr, "Standeal API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}
