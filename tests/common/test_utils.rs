use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response},
};
use scaffold_server::{
    assistant::Assistant,
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    server::{self, handlers::AppState},
};
use serde_json::Value;
use std::sync::Arc;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            provider: "groq".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key: "test-api-key".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            classifier_max_tokens: 1024,
            chat_max_tokens: 8000,
        },
    }
}

/// Build the full router around a mock client. The mock is returned so tests
/// can inspect what was forwarded.
pub fn create_test_app(mock: MockLlmClient) -> (Router, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let config = create_test_config();
    let assistant = Assistant::with_client(mock.clone(), &config.llm);

    let app = server::router(AppState {
        assistant: Arc::new(assistant),
    });

    (app, mock)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

llm:
  provider: "groq"
  base_url: "http://localhost:9999/openai/v1"
  api_key: "gsk_from_file"
  model: "llama-3.1-8b-instant"
  chat_max_tokens: 4096
"#;
