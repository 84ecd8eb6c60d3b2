use crate::use_cases::{FlavorTextError, FlavorTextSource};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    // Concatenated text of the first candidate; empty when the model returned nothing.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().map(|part| part.text).collect())
            .unwrap_or_default()
    }
}

fn prompt(score: u32) -> String {
    format!(
        "Generate a short, witty, and slightly epic game over message for a player who scored \
         {score} points in a 2D top-down space shooter game called 'Astro Blaster'. If the score \
         is low (e.g. < 50), be a bit cheeky but encouraging. If high (e.g. > 200), be more \
         congratulatory. Keep it under 25 words."
    )
}

// Thin reqwest client for a hosted text-generation model.
#[derive(Clone)]
pub struct GenerativeTextClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GenerativeTextClient {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl FlavorTextSource for GenerativeTextClient {
    async fn compose(&self, score: u32) -> Result<String, FlavorTextError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt(score),
                }],
            }],
        };

        let response = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|_| FlavorTextError::Unavailable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FlavorTextError::Rejected(status.as_u16()));
        }

        response
            .json::<GenerateResponse>()
            .await
            .map(GenerateResponse::into_text)
            .map_err(|_| FlavorTextError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::flavor::{FALLBACK_MESSAGE, game_over_message};
    use axum::{
        Json, Router,
        extract::{Path, Query},
        http::StatusCode,
        response::IntoResponse,
        routing::post,
    };
    use serde_json::{Value, json};
    use std::collections::HashMap;

    async fn fake_model(
        Path(call): Path<String>,
        Query(query): Query<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> impl IntoResponse {
        if query.get("key").map(String::as_str) != Some("test-key") {
            return (StatusCode::FORBIDDEN, Json(json!({"error": "bad key"})));
        }
        let prompt = body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();
        let reply = match call.as_str() {
            "ok:generateContent" if prompt.contains("scored 120 points") => {
                json!({"candidates": [{"content": {"parts": [{"text": "Stellar "}, {"text": "run!"}]}}]})
            }
            "empty:generateContent" => json!({"candidates": []}),
            "garbled:generateContent" => json!({"candidates": "nope"}),
            _ => return (StatusCode::NOT_FOUND, Json(json!({}))),
        };
        (StatusCode::OK, Json(reply))
    }

    async fn spawn_fake_model() -> String {
        let app = Router::new().route("/v1beta/models/{call}", post(fake_model));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake model");
        let addr = listener.local_addr().expect("fake model addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}")
    }

    fn client(base_url: &str, model: &str, key: &str) -> GenerativeTextClient {
        GenerativeTextClient::new(base_url, model, key, Duration::from_secs(2)).expect("client")
    }

    #[tokio::test]
    async fn when_model_answers_then_parts_are_joined() {
        let base = spawn_fake_model().await;

        let text = client(&base, "ok", "test-key").compose(120).await.expect("text");

        assert_eq!(text, "Stellar run!");
    }

    #[tokio::test]
    async fn when_model_returns_no_candidates_then_score_line_is_shown() {
        let base = spawn_fake_model().await;

        let message = game_over_message(&client(&base, "empty", "test-key"), 30).await;

        assert_eq!(message, "Score: 30. The cosmos awaits your return!");
    }

    #[tokio::test]
    async fn when_key_is_rejected_then_status_is_reported() {
        let base = spawn_fake_model().await;

        let err = client(&base, "ok", "wrong").compose(10).await.unwrap_err();

        assert!(matches!(err, FlavorTextError::Rejected(403)));
    }

    #[tokio::test]
    async fn when_body_is_garbled_then_fallback_is_shown() {
        let base = spawn_fake_model().await;
        let source = client(&base, "garbled", "test-key");

        assert!(matches!(
            source.compose(10).await,
            Err(FlavorTextError::Malformed)
        ));
        assert_eq!(game_over_message(&source, 10).await, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn when_service_is_unreachable_then_source_is_unavailable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = client(&format!("http://{addr}"), "ok", "test-key")
            .compose(10)
            .await
            .unwrap_err();

        assert!(matches!(err, FlavorTextError::Unavailable));
    }
}
