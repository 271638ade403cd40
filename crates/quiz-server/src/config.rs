//! Environment-driven server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8090";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Optional path to an alternative quiz definition.
    pub quiz_path: Option<PathBuf>,
    /// Webhook receiving accepted lead submissions. Without it, leads are
    /// only logged.
    pub webhook_url: Option<String>,
    /// Allowed CORS origins; absent means any origin.
    pub allowed_origins: Option<Vec<String>>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup("QUIZ_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .map_err(|error| ConfigError::InvalidValue {
                key: "QUIZ_BIND_ADDR".into(),
                message: format!("{error}"),
            })?;

        let quiz_path = lookup("QUIZ_SPEC_PATH")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let webhook_url = lookup("QUIZ_WEBHOOK_URL").filter(|url| !url.trim().is_empty());
        if let Some(url) = &webhook_url {
            reqwest::Url::parse(url).map_err(|error| ConfigError::InvalidValue {
                key: "QUIZ_WEBHOOK_URL".into(),
                message: format!("{error}"),
            })?;
        }

        let allowed_origins = lookup("QUIZ_ALLOWED_ORIGINS")
            .map(|raw| split_origins(&raw))
            .filter(|origins| !origins.is_empty());

        Ok(Self {
            bind_addr,
            quiz_path,
            webhook_url,
            allowed_origins,
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
