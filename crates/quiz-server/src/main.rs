//! Binary entry point: load config and quiz definition, pick a sink, serve.

mod config;
mod routes;
mod sink;

use std::sync::Arc;

use anyhow::Context;

use quiz_spec::{QuizSpec, default_quiz};

use crate::config::ServerConfig;
use crate::routes::{AppState, quiz_routes};
use crate::sink::{LeadSink, LogSink, WebhookSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;

    let spec = load_quiz(&config)?;
    tracing::info!(quiz = %spec.id, questions = spec.questions.len(), "quiz definition loaded");

    let sink: Arc<dyn LeadSink> = match &config.webhook_url {
        Some(url) => {
            tracing::info!(webhook = %url, "forwarding leads to webhook");
            Arc::new(WebhookSink::new(url.clone()))
        }
        None => {
            tracing::info!("no webhook configured; leads will only be logged");
            Arc::new(LogSink)
        }
    };

    let state = AppState {
        spec: Arc::new(spec),
        sink,
    };
    let app = quiz_routes(state, config.allowed_origins.as_deref());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "quiz server listening");
    axum::serve(listener, app).await?;
    Ok(())
}

fn load_quiz(config: &ServerConfig) -> anyhow::Result<QuizSpec> {
    match &config.quiz_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read quiz definition {}", path.display()))?;
            QuizSpec::from_json(&json).context("invalid quiz definition")
        }
        None => default_quiz().context("bundled quiz definition"),
    }
}
