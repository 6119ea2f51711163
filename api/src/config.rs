//! Service configuration, loaded from environment variables.
//!
//! Load .env via `dotenvy::dotenv()` before calling [`AppConfig::load`].

use std::env;

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};

/// Allowed cross-origin request sources: wildcard or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

/// Full service config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// DATABASE_URL: SQLite file path or `sqlite:` URL.
    pub database_url: String,
    /// BIND_ADDR
    pub bind_addr: String,
    /// CORS_ORIGINS: `*` or comma-separated origin list.
    pub cors_origins: CorsOrigins,
    /// CONTACT_EMAIL: company address receiving notifications.
    pub contact_email: String,
    /// OPENAI_API_KEY: text-generation collaborator key; unset means
    /// fallback-template emails only.
    pub openai_api_key: Option<String>,
    /// OPENAI_MODEL
    pub openai_model: String,
    /// SENDGRID_API_KEY: mail-delivery key; unset means log-only delivery.
    pub sendgrid_api_key: Option<String>,
}

fn parse_origins(raw: &str) -> CorsOrigins {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "*" {
        return CorsOrigins::Any;
    }
    CorsOrigins::List(
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

impl AppConfig {
    /// Loads config from environment variables, applying defaults.
    pub fn load() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "standeal.db".to_string());
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        let cors_origins = parse_origins(&env::var("CORS_ORIGINS").unwrap_or_default());
        let contact_email =
            env::var("CONTACT_EMAIL").unwrap_or_else(|_| "office@standeal.md".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let sendgrid_api_key = env::var("SENDGRID_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(Self {
            database_url,
            bind_addr,
            cors_origins,
            contact_email,
            openai_api_key,
            openai_model,
            sendgrid_api_key,
        })
    }

    /// Builds the CORS layer. Wildcard origins cannot carry credentials;
    /// an explicit origin list can.
    pub fn cors_layer(&self) -> anyhow::Result<CorsLayer> {
        match &self.cors_origins {
            CorsOrigins::Any => Ok(CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)),
            CorsOrigins::List(origins) => {
                let values = origins
                    .iter()
                    .map(|o| {
                        o.parse::<HeaderValue>()
                            .map_err(|_| anyhow::anyhow!("invalid CORS origin: {}", o))
                    })
                    .collect::<anyhow::Result<Vec<_>>>()?;
                Ok(CorsLayer::new()
                    .allow_origin(values)
                    .allow_methods(AllowMethods::mirror_request())
                    .allow_headers(AllowHeaders::mirror_request())
                    .allow_credentials(true))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_and_empty_parse_as_any() {
        assert_eq!(parse_origins("*"), CorsOrigins::Any);
        assert_eq!(parse_origins(""), CorsOrigins::Any);
        assert_eq!(parse_origins("  *  "), CorsOrigins::Any);
    }

    #[test]
    fn comma_list_parses_trimmed() {
        assert_eq!(
            parse_origins("https://standeal.md, https://www.standeal.md"),
            CorsOrigins::List(vec![
                "https://standeal.md".to_string(),
                "https://www.standeal.md".to_string()
            ])
        );
    }

    #[test]
    fn explicit_list_builds_credentialed_layer() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            cors_origins: CorsOrigins::List(vec!["https://standeal.md".to_string()]),
            contact_email: "office@standeal.md".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            sendgrid_api_key: None,
        };
        assert!(config.cors_layer().is_ok());
    }

    #[test]
    fn invalid_origin_is_rejected() {
        let config = AppConfig {
            database_url: "sqlite::memory:".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            cors_origins: CorsOrigins::List(vec!["bad\norigin".to_string()]),
            contact_email: "office@standeal.md".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            sendgrid_api_key: None,
        };
        assert!(config.cors_layer().is_err());
    }
}
