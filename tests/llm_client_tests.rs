use pretty_assertions::assert_eq;
use scaffold_server::{
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, LlmClient, OpenAiClient},
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

fn create_test_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        base_url: format!("{}/openai/v1", server.uri()),
        api_key: "gsk_test".to_string(),
        ..LlmConfig::default()
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1733000000,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 40,
            "completion_tokens": 1,
            "total_tokens": 41
        }
    })
}

fn classifier_request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        messages: vec![
            ChatMessage::system("Only return node or react."),
            ChatMessage::user("a portfolio site"),
        ],
        max_tokens: Some(1024),
    }
}

#[tokio::test]
async fn test_posts_to_chat_completions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .and(header("authorization", "Bearer gsk_test"))
        .and(body_partial_json(json!({
            "model": "llama-3.3-70b-versatile",
            "max_tokens": 1024,
            "messages": [
                { "role": "system", "content": "Only return node or react." },
                { "role": "user", "content": "a portfolio site" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("react")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server));
    let response = client
        .create_chat_completion(classifier_request())
        .await
        .unwrap();

    assert_eq!(response.id, "chatcmpl-abc123");
    assert_eq!(response.first_content(), Some("react"));
    assert_eq!(response.choices[0].message.role, "assistant");
    assert_eq!(response.usage.unwrap().total_tokens, 41);
}

#[tokio::test]
async fn test_parses_groq_response_extensions() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "chatcmpl-5f1c9a2e",
            "object": "chat.completion",
            "created": 1733000000,
            "model": "llama-3.3-70b-versatile",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": "react" },
                "logprobs": null,
                "finish_reason": "stop"
            }],
            "usage": {
                "queue_time": 0.018331,
                "prompt_tokens": 72,
                "prompt_time": 0.004132,
                "completion_tokens": 2,
                "completion_time": 0.007272,
                "total_tokens": 74,
                "total_time": 0.011404
            },
            "usage_breakdown": null,
            "system_fingerprint": "fp_3f3b593e33",
            "x_groq": { "id": "req_01jf0k1x2yfbqv3m8s6k1n0z9w" },
            "service_tier": "on_demand"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server));
    let response = client
        .create_chat_completion(classifier_request())
        .await
        .unwrap();

    assert_eq!(response.first_content(), Some("react"));
    assert_eq!(response.model, "llama-3.3-70b-versatile");
    assert_eq!(response.usage.unwrap().total_tokens, 74);
}

#[tokio::test]
async fn test_null_content_becomes_empty_string() {
    let server = MockServer::start().await;

    let mut body = completion_body("");
    body["choices"][0]["message"]["content"] = serde_json::Value::Null;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server));
    let response = client
        .create_chat_completion(classifier_request())
        .await
        .unwrap();

    assert_eq!(response.first_content(), Some(""));
}

#[tokio::test]
async fn test_provider_error_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/openai/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {
                "message": "Invalid API Key",
                "type": "invalid_request_error",
                "code": "invalid_api_key"
            }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server));
    let err = client
        .create_chat_completion(classifier_request())
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Invalid API Key"), "got: {}", err);
}

#[tokio::test]
async fn test_unknown_role_fails_before_sending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hi")))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server));
    let request = ChatCompletionRequest {
        messages: vec![ChatMessage {
            role: "narrator".to_string(),
            content: "Once upon a time".to_string(),
        }],
        max_tokens: Some(8000),
    };

    let err = client.create_chat_completion(request).await.unwrap_err();
    assert!(err.to_string().contains("Unknown message role: narrator"));
}
