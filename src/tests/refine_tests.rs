//! improve_system_prompt のスタブプロバイダに対する結合テスト

use std::sync::Arc;

use crate::adapter::config::PromptlabConfig;
use crate::adapter::file_json_log::NoopLog;
use crate::adapter::stubs::{StubApiKey, StubChat};
use crate::error::Error;
use crate::usecase::{PlaygroundDeps, PlaygroundUseCase};

fn playground(chat: Arc<StubChat>, key: Option<&str>) -> PlaygroundUseCase {
    let config = PromptlabConfig::default();
    PlaygroundUseCase::new(PlaygroundDeps {
        chat,
        api_key: Arc::new(StubApiKey(key.map(|s| s.to_string()))),
        log: Arc::new(NoopLog),
        generation: config.generation,
        refinement: config.refinement,
    })
}

#[test]
fn test_improve_returns_replacement_prompt_exactly() {
    let chat = Arc::new(StubChat::new(vec![Ok(Some(
        "You are a detailed assistant who writes at least 3 stanzas.".to_string(),
    ))]));
    let lab = playground(chat.clone(), Some("sk-test"));
    let new_prompt = lab
        .improve_system_prompt(
            "Write a haiku about rain",
            "You are a helpful assistant...",
            "Soft rain falls at dawn...",
            "too short",
        )
        .unwrap();
    assert_eq!(
        new_prompt,
        "You are a detailed assistant who writes at least 3 stanzas."
    );

    // 改善指示は user ロール 1 メッセージのみで、4 入力が本文に埋め込まれている
    let requests = chat.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].messages.len(), 1);
    assert_eq!(requests[0].messages[0].role, "user");
    let body = &requests[0].messages[0].content;
    assert!(body.contains("Write a haiku about rain"));
    assert!(body.contains("You are a helpful assistant..."));
    assert!(body.contains("Soft rain falls at dawn..."));
    assert!(body.contains("too short"));
    assert_eq!(requests[0].temperature, 0.7);
    assert_eq!(requests[0].max_tokens, 1000);
}

#[test]
fn test_improve_provider_failure_propagates() {
    let chat = Arc::new(StubChat::new(vec![Err(Error::http("connection reset"))]));
    let lab = playground(chat, Some("sk-test"));
    let err = lab
        .improve_system_prompt("m", "s", "o", "f")
        .unwrap_err();
    assert!(err.is_provider());
    assert!(err.to_string().contains("connection reset"));
}

#[test]
fn test_improve_missing_key_fails_before_any_network_call() {
    let chat = Arc::new(StubChat::new(vec![Ok(Some("never".to_string()))]));
    let lab = playground(chat.clone(), None);
    let err = lab.improve_system_prompt("m", "s", "o", "f").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert_eq!(chat.call_count(), 0);
}

#[test]
fn test_improve_missing_content_falls_back_to_original_prompt() {
    let chat = Arc::new(StubChat::new(vec![Ok(None)]));
    let lab = playground(chat, Some("sk-test"));
    let new_prompt = lab
        .improve_system_prompt("m", "You are helpful.", "o", "f")
        .unwrap();
    assert_eq!(new_prompt, "You are helpful.");
}
