use scriptgen_core::{
    ChatClient, GeneratedScript, MAX_OUTPUT_TOKENS, ScriptGenerator, ScriptSection,
    ScriptSettings, ScriptgenError, TextGenerator,
};
use serde_json::{Value, json};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

fn client_for(server: &MockServer) -> ChatClient {
    ChatClient::new(
        format!("{}{}", server.uri(), COMPLETIONS_PATH),
        "test-model",
        "test-key",
    )
    .unwrap()
}

fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 120, "completion_tokens": 480, "total_tokens": 600 }
    })
}

fn script() -> GeneratedScript {
    GeneratedScript {
        title: "Bread at Home".to_string(),
        hook: "Your oven is a bakery waiting to happen.".to_string(),
        introduction: "Let's bake a loaf from scratch.".to_string(),
        main_sections: vec![ScriptSection {
            title: "The Starter".to_string(),
            content: "Flour, water and patience.".to_string(),
            sub_points: vec!["Feed daily".to_string(), "Watch it rise".to_string()],
        }],
        conclusion: "Bake along and share your crumb shots!".to_string(),
        tags: vec!["baking".to_string(), "sourdough 2026".to_string()],
        estimated_duration: "6 minutes".to_string(),
    }
}

#[tokio::test]
async fn sends_prompt_with_model_temperature_and_token_cap() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "max_tokens": MAX_OUTPUT_TOKENS,
            "messages": [{ "role": "user", "content": "Write a script" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("hello")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client_for(&server)
        .generate("Write a script", 0.4)
        .await
        .unwrap();
    assert_eq!(text, "hello");

    let requests = server.received_requests().await.unwrap();
    let body: Value = requests[0].body_json().unwrap();
    let temperature = body["temperature"].as_f64().unwrap();
    assert!((temperature - 0.4).abs() < 1e-6);
}

#[tokio::test]
async fn api_error_message_is_surfaced_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "API key not valid", "type": "invalid_request_error" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate("prompt", 0.7).await.unwrap_err();
    match err {
        ScriptgenError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "API key not valid");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate("prompt", 0.7).await.unwrap_err();
    assert!(matches!(
        err,
        ScriptgenError::Api { status: 429, ref message } if message == "quota exhausted"
    ));
}

#[tokio::test]
async fn empty_error_body_falls_back_to_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server).generate("prompt", 0.7).await.unwrap_err();
    assert!(matches!(
        err,
        ScriptgenError::Api { status: 503, ref message } if message == "Service Unavailable"
    ));
    assert!(!err.to_string().trim_end().ends_with(':'));
}

#[tokio::test]
async fn empty_choices_are_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = client_for(&server).generate("prompt", 0.7).await.unwrap_err();
    assert!(matches!(err, ScriptgenError::EmptyResponse));
}

#[tokio::test]
async fn generator_parses_fenced_model_output() {
    let server = MockServer::start().await;
    let content = format!(
        "```json\n{}\n```",
        serde_json::to_string_pretty(&script()).unwrap()
    );
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(&content)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = ScriptGenerator::new(client_for(&server));
    let generated = generator
        .generate("Sourdough bread", ScriptSettings::default())
        .await
        .unwrap();
    assert_eq!(generated, script());
}

#[tokio::test]
async fn generator_rejects_incomplete_script() {
    let server = MockServer::start().await;
    let mut value = serde_json::to_value(script()).unwrap();
    value.as_object_mut().unwrap().remove("tags");
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion(&value.to_string())),
        )
        .mount(&server)
        .await;

    let generator = ScriptGenerator::new(client_for(&server));
    let result = generator
        .generate("Sourdough bread", ScriptSettings::default())
        .await;
    assert!(matches!(result, Err(ScriptgenError::JsonError(_))));
}

#[tokio::test]
async fn blank_topic_sends_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(0)
        .mount(&server)
        .await;

    let generator = ScriptGenerator::new(client_for(&server));
    let result = generator.generate("   ", ScriptSettings::default()).await;
    assert!(matches!(result, Err(ScriptgenError::EmptyTopic)));
}
