//! HTTP routes under the `/api` prefix.
//!
//! Create handlers follow one shape: validate the payload, persist the
//! record, schedule notifications, echo the stored record with 201. List
//! handlers return up to 1000 records in storage order.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tracing::info;

use standeal_core::{
    validate, CompanyInfo, ContactMessage, ContactMessageCreate, StatusCheck, StatusCheckCreate,
    TransportQuote, TransportQuoteCreate,
};

use crate::dispatcher::Notification;
use crate::error::ApiError;
use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/company-info", get(company_info))
        .route("/api/transport-quote", post(create_transport_quote))
        .route("/api/transport-quotes", get(list_transport_quotes))
        .route("/api/contact", post(create_contact_message))
        .route("/api/contact-messages", get(list_contact_messages))
        .route("/api/status", post(create_status_check).get(list_status_checks))
        .layer(cors)
        .with_state(state)
}

/// Liveness/identity payload.
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Standeal.md Transport Services API",
        "status": "active",
    }))
}

/// Static company card; no storage access.
async fn company_info() -> Json<CompanyInfo> {
    Json(CompanyInfo::default())
}

async fn create_transport_quote(
    State(state): State<AppState>,
    Json(payload): Json<TransportQuoteCreate>,
) -> Result<(StatusCode, Json<TransportQuote>), ApiError> {
    let quote = validate::transport_quote(&payload)?;
    state.store.quotes.insert(&quote).await?;

    info!(id = %quote.id, client_name = %quote.client_name, "Transport quote created");
    state.dispatcher.schedule(Notification::Quote(quote.clone()));

    Ok((StatusCode::CREATED, Json(quote)))
}

async fn list_transport_quotes(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransportQuote>>, ApiError> {
    Ok(Json(state.store.quotes.list().await?))
}

async fn create_contact_message(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessageCreate>,
) -> Result<(StatusCode, Json<ContactMessage>), ApiError> {
    let contact = validate::contact_message(&payload)?;
    state.store.contacts.insert(&contact).await?;

    info!(id = %contact.id, subject = %contact.subject, "Contact message created");
    state.dispatcher.schedule(Notification::Contact(contact.clone()));

    Ok((StatusCode::CREATED, Json(contact)))
}

async fn list_contact_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContactMessage>>, ApiError> {
    Ok(Json(state.store.contacts.list().await?))
}

async fn create_status_check(
    State(state): State<AppState>,
    Json(payload): Json<StatusCheckCreate>,
) -> Result<(StatusCode, Json<StatusCheck>), ApiError> {
    let check = validate::status_check(&payload)?;
    state.store.status.insert(&check).await?;
    Ok((StatusCode::CREATED, Json(check)))
}

async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(state.store.status.list().await?))
}
