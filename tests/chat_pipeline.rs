//! End-to-end chat pipeline: controller → assistant → scripted provider.

use std::sync::Arc;

use tokio::sync::Notify;

use folio::chat::{
    Assistant, ChatController, Connectivity, FailureKind, Fallbacks, Ignored, Message, Role,
    Submission,
};
use folio::content::Catalog;
use folio::llm::providers::scripted::ScriptedProvider;
use folio::llm::{LlmProvider, ProviderError};
use folio::persona::Persona;

fn controller(script: &ScriptedProvider, connectivity: Connectivity) -> Arc<ChatController> {
    let persona = Persona::load(std::path::Path::new("config/prompts/persona.md"), &Catalog::site());
    let assistant = Assistant::new(
        LlmProvider::Scripted(script.clone()),
        persona,
        0.1,
        Fallbacks::site(),
    );
    Arc::new(ChatController::new(Arc::new(assistant), connectivity))
}

#[tokio::test]
async fn answered_question_appends_user_then_ai() {
    let script = ScriptedProvider::new();
    script.push_reply("He built **TunnelViz**.");
    let c = controller(&script, Connectivity::online());

    let outcome = c.submit("What did Rahul build?").await;
    assert_eq!(outcome, Submission::Answered(Message::ai("He built **TunnelViz**.")));

    let view = c.snapshot();
    assert_eq!(view.messages.len(), 3);
    assert_eq!(view.messages[1], Message::user("What did Rahul build?"));
    assert_eq!(view.messages[2].role, Role::Ai);
    assert!(!view.busy);
}

#[tokio::test]
async fn submit_while_busy_is_dropped() {
    let gate = Arc::new(Notify::new());
    let script = ScriptedProvider::gated(gate.clone());
    script.push_reply("first answer");
    let c = controller(&script, Connectivity::online());

    let first = {
        let c = c.clone();
        tokio::spawn(async move { c.submit("one").await })
    };

    let mut rx = c.subscribe();
    rx.wait_for(|v| v.busy).await.unwrap();

    assert_eq!(c.submit("two").await, Submission::Ignored(Ignored::Busy));
    assert_eq!(c.snapshot().messages.last(), Some(&Message::user("one")));

    gate.notify_one();
    assert_eq!(first.await.unwrap(), Submission::Answered(Message::ai("first answer")));

    let view = c.snapshot();
    assert_eq!(
        &view.messages[1..],
        &[Message::user("one"), Message::ai("first answer")]
    );
    assert!(!view.busy);
    assert_eq!(script.calls(), 1);
}

#[tokio::test]
async fn every_failure_kind_becomes_an_ai_message() {
    let fallbacks = Fallbacks::site();
    let cases: [(fn(String) -> ProviderError, &str, FailureKind); 6] = [
        (ProviderError::Network, "connection refused", FailureKind::Network),
        (ProviderError::RateLimited, "quota", FailureKind::RateLimited),
        (ProviderError::SafetyBlocked, "SAFETY", FailureKind::SafetyFiltered),
        (ProviderError::Unauthorized, "bad key", FailureKind::Unauthorized),
        (ProviderError::Request, "HTTP 500: boom", FailureKind::Unavailable),
        (ProviderError::Request, "dns lookup failed", FailureKind::Network),
    ];

    let script = ScriptedProvider::new();
    for (make, msg, _) in &cases {
        script.push_error(make(msg.to_string()));
    }
    let c = controller(&script, Connectivity::online());

    for (i, (_, _, kind)) in cases.iter().enumerate() {
        let outcome = c.submit(&format!("question {i}")).await;
        assert_eq!(outcome, Submission::Answered(Message::ai(fallbacks.message(*kind))), "case {i}");
        assert!(!c.is_busy());
    }
    assert_eq!(c.snapshot().messages.len(), 1 + 2 * cases.len());
}

#[tokio::test]
async fn empty_model_reply_uses_contact_fallback() {
    let script = ScriptedProvider::new();
    script.push_reply("");
    let c = controller(&script, Connectivity::online());

    c.submit("hi").await;
    let last = c.snapshot().messages.last().cloned().unwrap();
    assert_eq!(last, Message::ai(Fallbacks::site().empty_reply()));
    assert!(last.text.contains("rahulshyam2006@outlook.com"));
    assert!(last.text.contains("rahulcvfiitjee@gmail.com"));
}

#[tokio::test]
async fn offline_never_calls_the_provider() {
    let script = ScriptedProvider::new();
    let connectivity = Connectivity::offline();
    let c = controller(&script, connectivity.clone());

    c.submit("hello?").await;
    assert_eq!(script.calls(), 0);
    assert_eq!(
        c.snapshot().messages.last(),
        Some(&Message::ai(Fallbacks::site().message(FailureKind::Offline)))
    );

    // Back online: the next question goes out.
    connectivity.set_online(true);
    script.push_reply("back");
    c.submit("hello again").await;
    assert_eq!(script.calls(), 1);
}

#[tokio::test]
async fn whitespace_submission_changes_nothing() {
    let script = ScriptedProvider::new();
    let c = controller(&script, Connectivity::online());
    let before = c.snapshot();

    assert_eq!(c.submit("   ").await, Submission::Ignored(Ignored::Empty));
    assert_eq!(c.snapshot(), before);
    assert_eq!(script.calls(), 0);
}

#[tokio::test]
async fn prompt_is_trimmed_question() {
    let script = ScriptedProvider::new();
    script.push_reply("ok");
    let c = controller(&script, Connectivity::online());

    c.submit("  contact info?  ").await;
    assert_eq!(script.prompts(), vec!["contact info?"]);
}
