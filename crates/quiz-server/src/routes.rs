//! REST endpoints for the quiz funnel.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};

use quiz_spec::{
    AnswerRecord, LeadContact, QuizSpec, build_render_payload, complete, lead, render_json_ui,
};

use crate::sink::LeadSink;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub spec: Arc<QuizSpec>,
    pub sink: Arc<dyn LeadSink>,
}

#[derive(Debug, Deserialize)]
struct CompleteRequest {
    #[serde(default)]
    answers: AnswerRecord,
}

/// Payload posted by the quiz shell once the respondent leaves their
/// contact details. `result` is the completion response the client
/// received earlier and is forwarded untouched.
#[derive(Debug, Serialize, Deserialize)]
struct LeadSubmission {
    #[serde(default)]
    answers: AnswerRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    result: Option<Value>,
    lead: LeadContact,
}

async fn health() -> &'static str {
    "ok"
}

/// GET /api/quiz
///
/// The quiz definition as a UI payload: ordered questions, options, the
/// answer schema, and progress for an empty record.
async fn get_quiz(State(state): State<AppState>) -> impl IntoResponse {
    let payload = build_render_payload(&state.spec, &AnswerRecord::new());
    Json(render_json_ui(&payload))
}

/// POST /api/quiz/complete
///
/// Classify the submitted record. Scores come from the weight tables on
/// this side; anything the client computed itself is ignored.
async fn complete_quiz(Json(request): Json<CompleteRequest>) -> impl IntoResponse {
    let report = complete(request.answers);
    tracing::info!(
        score = report.profile.score,
        tier = report.profile.tier.as_str(),
        path = report.path.as_str(),
        "quiz completed"
    );
    Json(report)
}

/// POST /api/leads
///
/// Validate the contact block, answer immediately, and deliver the
/// submission to the sink in the background.
async fn submit_lead(
    State(state): State<AppState>,
    Json(submission): Json<LeadSubmission>,
) -> Response {
    let validation = lead::validate(&submission.lead);
    if !validation.valid {
        tracing::warn!(errors = validation.errors.len(), "lead submission rejected");
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "status": "error", "validation": validation })),
        )
            .into_response();
    }

    tracing::info!(name = %submission.lead.name, "lead accepted");

    match serde_json::to_value(&submission) {
        Ok(payload) => {
            let sink = Arc::clone(&state.sink);
            tokio::spawn(async move {
                if let Err(error) = sink.deliver(&payload).await {
                    tracing::warn!(error = %error, "lead delivery failed");
                }
            });
        }
        Err(error) => {
            tracing::warn!(error = %error, "lead submission not serializable, delivery skipped");
        }
    }

    Json(json!({ "ok": true })).into_response()
}

/// Build the HTTP router.
pub fn quiz_routes(state: AppState, allowed_origins: Option<&[String]>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/quiz", get(get_quiz))
        .route("/api/quiz/complete", post(complete_quiz))
        .route("/api/leads", post(submit_lead))
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

fn cors_layer(allowed_origins: Option<&[String]>) -> CorsLayer {
    match allowed_origins {
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        Some(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::SinkError;
    use async_trait::async_trait;
    use quiz_spec::default_quiz;
    use reqwest::Method;
    use std::net::SocketAddr;
    use std::time::Duration;
    use tokio::sync::mpsc;

    struct ChannelSink {
        sender: mpsc::UnboundedSender<Value>,
    }

    #[async_trait]
    impl LeadSink for ChannelSink {
        async fn deliver(&self, submission: &Value) -> Result<(), SinkError> {
            self.sender.send(submission.clone()).ok();
            Ok(())
        }
    }

    fn channel_state() -> (AppState, mpsc::UnboundedReceiver<Value>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let state = AppState {
            spec: Arc::new(default_quiz().expect("bundled quiz")),
            sink: Arc::new(ChannelSink { sender }),
        };
        (state, receiver)
    }

    async fn spawn_server(state: AppState, origins: Option<Vec<String>>) -> SocketAddr {
        let app = quiz_routes(state, origins.as_deref());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });
        addr
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let (state, _receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let body = reqwest::get(format!("http://{addr}/health"))
            .await
            .expect("request")
            .text()
            .await
            .expect("body");
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn quiz_endpoint_returns_ui_payload() {
        let (state, _receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let payload: Value = reqwest::get(format!("http://{addr}/api/quiz"))
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");

        assert_eq!(payload["quiz_id"], "blum-intake");
        assert_eq!(payload["status"], "need_input");
        assert_eq!(payload["progress"]["total"], 8);
        assert_eq!(payload["questions"].as_array().map(Vec::len), Some(8));
        assert_eq!(payload["schema"]["type"], "object");
    }

    #[tokio::test]
    async fn completion_ignores_client_supplied_scores() {
        let (state, _receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let body = json!({
            "answers": {
                "concern": "Arrugas o líneas de expresión",
                "preference": "Inyectables estéticos (Botox, toxina botulínica, ácido hialurónico, bioestimuladores)",
                "experience": "Sí, tratamientos estéticos avanzados"
            },
            "lead_score": 1,
            "lead_type": "nurture"
        });

        let report: Value = reqwest::Client::new()
            .post(format!("http://{addr}/api/quiz/complete"))
            .json(&body)
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");

        assert_eq!(report["lead_score"], 10);
        assert_eq!(report["lead_type"], "elite");
        assert_eq!(report["intent"]["botox"], true);
        assert_eq!(report["intent"]["fillers"], true);
    }

    #[tokio::test]
    async fn completion_tolerates_an_empty_record() {
        let (state, _receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let report: Value = reqwest::Client::new()
            .post(format!("http://{addr}/api/quiz/complete"))
            .json(&json!({}))
            .send()
            .await
            .expect("request")
            .json()
            .await
            .expect("json body");

        assert_eq!(report["lead_score"], 0);
        assert_eq!(report["lead_type"], "nurture");
        assert_eq!(report["path"], "evaluation");
        assert_eq!(report["summary"].as_array().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn lead_endpoint_rejects_invalid_contact() {
        let (state, mut receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/leads"))
            .json(&json!({
                "lead": { "name": "", "email": "nope", "phone": "123", "consent": false }
            }))
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), reqwest::StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json().await.expect("json body");
        assert_eq!(body["status"], "error");
        assert_eq!(body["validation"]["valid"], false);
        assert!(!body["validation"]["errors"].as_array().expect("errors").is_empty());

        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn lead_endpoint_forwards_accepted_submission() {
        let (state, mut receiver) = channel_state();
        let addr = spawn_server(state, None).await;

        let response = reqwest::Client::new()
            .post(format!("http://{addr}/api/leads"))
            .json(&json!({
                "answers": { "goal": "Bienestar hormonal y salud integral" },
                "result": {
                    "lead_score": 3,
                    "lead_type": "standard",
                    "summary": ["Enfoque holístico de bienestar integral"],
                    "intent": { "botox": false, "fillers": false, "first_time": true }
                },
                "lead": {
                    "name": "Ana María Soto",
                    "email": "ana@example.com",
                    "phone": "+56 9 1234 5678",
                    "consent": true
                }
            }))
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        let body: Value = response.json().await.expect("json body");
        assert_eq!(body["ok"], true);

        let delivered = tokio::time::timeout(Duration::from_secs(5), receiver.recv())
            .await
            .expect("delivery within timeout")
            .expect("one delivery");
        assert_eq!(delivered["lead"]["name"], "Ana María Soto");
        assert_eq!(delivered["lead"]["consent"], true);
        assert_eq!(delivered["answers"]["goal"], "Bienestar hormonal y salud integral");
        assert_eq!(delivered["result"]["lead_score"], 3);
        assert_eq!(delivered["result"]["intent"]["first_time"], true);
        assert_eq!(
            delivered["result"]["summary"][0],
            "Enfoque holístico de bienestar integral"
        );
    }

    #[tokio::test]
    async fn cors_reflects_configured_origin() {
        let (state, _receiver) = channel_state();
        let origins = vec!["https://blumspa.com".to_string()];
        let addr = spawn_server(state, Some(origins)).await;

        let response = reqwest::Client::new()
            .request(Method::OPTIONS, format!("http://{addr}/api/leads"))
            .header("Origin", "https://blumspa.com")
            .header("Access-Control-Request-Method", "POST")
            .send()
            .await
            .expect("preflight");

        let allowed = response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok());
        assert_eq!(allowed, Some("https://blumspa.com"));
    }
}
