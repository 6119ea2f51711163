//! # quote-writer
//!
//! Text-generation collaborator for quote-confirmation emails.
//!
//! [`EmailComposer`] is the narrow contract the dispatcher depends on;
//! [`OpenAiComposer`] implements it with a chat completion in Romanian.
//! [`fallback_quote_email`] is the fixed template used when the collaborator
//! is unreachable or not configured.

use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use standeal_core::TransportQuote;
use tracing::info;

const SYSTEM_MESSAGE: &str = "Ești un asistent profesional pentru StanDeal Transport, \
                              o companie de transport din Moldova.";

/// Composes the body of a quote-confirmation email. Failures are expected
/// (network, quota) and handled by the caller with [`fallback_quote_email`].
#[async_trait]
pub trait EmailComposer: Send + Sync {
    async fn compose_quote_email(&self, quote: &TransportQuote) -> anyhow::Result<String>;
}

/// Chat-completion backed composer.
#[derive(Clone)]
pub struct OpenAiComposer {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiComposer {
    /// Builds a composer using the given API key and default API base URL.
    pub fn new(api_key: String, model: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
        }
    }

    /// Builds a composer with a custom base URL (proxies, compatible endpoints).
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(base_url);
        Self {
            client: Arc::new(Client::with_config(config)),
            model,
        }
    }
}

/// Renders the Romanian prompt embedding all quote fields.
fn quote_prompt(quote: &TransportQuote) -> String {
    let weight = quote
        .cargo_weight
        .map(|w| format!("{} kg", w))
        .unwrap_or_else(|| "nespecificat".to_string());
    let dimensions = quote.cargo_dimensions.as_deref().unwrap_or("nespecificat");
    let additional = quote.additional_info.as_deref().unwrap_or("-");

    format!(
        "Creează un email profesional în limba română pentru o cerere de cotație \
         de transport cu următoarele informații:\n\n\
         Client: {}\n\
         Email: {}\n\
         Telefon: {}\n\
         De la: {}\n\
         Către: {}\n\
         Tipul mărfii: {}\n\
         Greutatea: {}\n\
         Dimensiuni: {}\n\
         Tipul transportului: {}\n\
         Urgența: {}\n\
         Informații adiționale: {}\n\n\
         Emailul trebuie să fie formal și profesional, să confirme primirea cererii \
         și să menționeze că vom contacta clientul în maxim 2 ore cu o cotație detaliată.",
        quote.client_name,
        quote.email,
        quote.phone,
        quote.pickup_location,
        quote.delivery_location,
        quote.cargo_type,
        weight,
        dimensions,
        quote.transport_type,
        quote.urgency,
        additional,
    )
}

/// Fixed plaintext body used when the text-generation collaborator fails:
/// summarizes the request and promises contact within 2 hours.
pub fn fallback_quote_email(quote: &TransportQuote) -> String {
    format!(
        "Stimat/ă {},\n\n\
         Am primit cererea dumneavoastră de cotație pentru serviciile de transport.\n\n\
         Detaliile cererii:\n\
         - Ruta: {} → {}\n\
         - Tipul mărfii: {}\n\
         - Tipul transportului: {}\n\n\
         Vă vom contacta în maxim 2 ore cu o cotație detaliată.\n\n\
         Cu stimă,\n\
         Echipa StanDeal Transport\n\
         office@standeal.md",
        quote.client_name,
        quote.pickup_location,
        quote.delivery_location,
        quote.cargo_type,
        quote.transport_type,
    )
}

#[async_trait]
impl EmailComposer for OpenAiComposer {
    async fn compose_quote_email(&self, quote: &TransportQuote) -> anyhow::Result<String> {
        info!(
            model = %self.model,
            quote_id = %quote.id,
            "Composing quote email via chat completion"
        );

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(SYSTEM_MESSAGE)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(quote_prompt(quote))
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from completion API");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use standeal_core::{TransportType, Urgency};
    use uuid::Uuid;

    fn sample_quote() -> TransportQuote {
        TransportQuote {
            id: Uuid::new_v4().to_string(),
            client_name: "Ion Popescu".to_string(),
            email: "ion@example.com".to_string(),
            phone: "068123456".to_string(),
            pickup_location: "Chișinău".to_string(),
            delivery_location: "Iași".to_string(),
            cargo_type: "electronics".to_string(),
            cargo_weight: Some(250.0),
            cargo_dimensions: None,
            transport_type: TransportType::International,
            urgency: Urgency::Urgent,
            additional_info: None,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn prompt_embeds_all_quote_fields() {
        let prompt = quote_prompt(&sample_quote());
        assert!(prompt.contains("Client: Ion Popescu"));
        assert!(prompt.contains("Email: ion@example.com"));
        assert!(prompt.contains("De la: Chișinău"));
        assert!(prompt.contains("Către: Iași"));
        assert!(prompt.contains("Greutatea: 250 kg"));
        assert!(prompt.contains("Dimensiuni: nespecificat"));
        assert!(prompt.contains("Tipul transportului: international"));
        assert!(prompt.contains("Urgența: urgent"));
        assert!(prompt.contains("maxim 2 ore"));
    }

    #[test]
    fn fallback_summarizes_route_and_cargo() {
        let body = fallback_quote_email(&sample_quote());
        assert!(body.contains("Stimat/ă Ion Popescu"));
        assert!(body.contains("Ruta: Chișinău → Iași"));
        assert!(body.contains("Tipul mărfii: electronics"));
        assert!(body.contains("Tipul transportului: international"));
        assert!(body.contains("maxim 2 ore"));
        assert!(body.contains("Echipa StanDeal Transport"));
    }
}
