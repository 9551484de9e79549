//! Router-level tests: every route is driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::Router;
use tower::ServiceExt;

use folio::chat::{Assistant, Connectivity, FailureKind, Fallbacks};
use folio::content::Catalog;
use folio::llm::providers::scripted::ScriptedProvider;
use folio::llm::{LlmProvider, ProviderError};
use folio::persona::PersonaBuilder;
use folio::site::{SiteState, build_router};

fn router(script: &ScriptedProvider, connectivity: Connectivity) -> Router {
    let assistant = Assistant::new(
        LlmProvider::Scripted(script.clone()),
        PersonaBuilder::new("persona").build(),
        0.1,
        Fallbacks::site(),
    );
    build_router(SiteState::new(Arc::new(assistant), connectivity, Catalog::site()))
}

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}

fn chat_request(message: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::json!({ "message": message }).to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn root_serves_the_portfolio_page() {
    let app = router(&ScriptedProvider::new(), Connectivity::online());
    let resp = app.oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_string(resp).await;
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("TunnelViz"));
    assert!(html.contains("id=\"chat\""));
    assert!(html.contains("subject=Project%20Inquiry"));
}

#[tokio::test]
async fn chat_returns_reply_and_rendered_html() {
    let script = ScriptedProvider::new();
    script.push_reply("**Hi** there\n- item one");
    let app = router(&script, Connectivity::online());

    let resp = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["reply"], "**Hi** there\n- item one");
    assert_eq!(body["source"], "model");
    assert_eq!(
        body["html"],
        r#"<p><strong>Hi</strong> there</p><div class="chat-li"><span class="chat-dot">•</span><span>item one</span></div>"#
    );
    assert_eq!(script.prompts(), vec!["hello"]);
}

#[tokio::test]
async fn empty_message_is_bad_request() {
    let script = ScriptedProvider::new();
    let app = router(&script, Connectivity::online());

    let resp = app.oneshot(chat_request("   ")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(resp).await["error"], "empty_message");
    assert_eq!(script.calls(), 0);
}

#[tokio::test]
async fn provider_failure_is_a_fallback_reply_not_an_http_error() {
    let script = ScriptedProvider::new();
    script.push_error(ProviderError::RateLimited("HTTP 429".into()));
    let app = router(&script, Connectivity::online());

    let resp = app.oneshot(chat_request("hi")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["reply"], Fallbacks::site().message(FailureKind::RateLimited));
    assert_eq!(body["source"], "rate_limited");
}

#[tokio::test]
async fn offline_server_answers_without_calling_out() {
    let script = ScriptedProvider::new();
    let app = router(&script, Connectivity::offline());

    let body = body_json(app.oneshot(chat_request("hi")).await.unwrap()).await;
    assert_eq!(body["source"], "offline");
    assert_eq!(script.calls(), 0);
}

#[tokio::test]
async fn model_markup_is_escaped() {
    let script = ScriptedProvider::new();
    script.push_reply("<img src=x onerror=alert(1)>");
    let app = router(&script, Connectivity::online());

    let body = body_json(app.oneshot(chat_request("hi")).await.unwrap()).await;
    let html = body["html"].as_str().unwrap();
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img"));
}

#[tokio::test]
async fn health_reports_provider_and_connectivity() {
    let app = router(&ScriptedProvider::new(), Connectivity::offline());
    let resp = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["provider"], "scripted");
    assert_eq!(body["online"], false);
    assert_eq!(body["upstream"], true);
}

#[tokio::test]
async fn health_reports_unreachable_upstream_separately() {
    let connectivity = Connectivity::online();
    connectivity.set_upstream_reachable(false);
    let app = router(&ScriptedProvider::new(), connectivity);

    let body = body_json(app.oneshot(get("/api/health")).await.unwrap()).await;
    assert_eq!(body["online"], true);
    assert_eq!(body["upstream"], false);
}

#[tokio::test]
async fn unreachable_upstream_does_not_gate_chat() {
    let script = ScriptedProvider::new();
    script.push_reply("still answering");
    let connectivity = Connectivity::online();
    connectivity.set_upstream_reachable(false);
    let app = router(&script, connectivity);

    let body = body_json(app.oneshot(chat_request("hi")).await.unwrap()).await;
    assert_eq!(body["source"], "model");
    assert_eq!(script.calls(), 1);
}

#[tokio::test]
async fn malformed_json_gets_error_envelope() {
    let script = ScriptedProvider::new();
    let app = router(&script, Connectivity::online());

    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"message\": "))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["error"], "bad_request");
    assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    assert_eq!(script.calls(), 0);
}

#[tokio::test]
async fn missing_message_field_gets_error_envelope() {
    let app = router(&ScriptedProvider::new(), Connectivity::online());

    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"text\": \"hi\"}"))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(resp).await["error"], "bad_request");
}

#[tokio::test]
async fn content_lists_catalog() {
    let app = router(&ScriptedProvider::new(), Connectivity::online());
    let body = body_json(app.oneshot(get("/api/content")).await.unwrap()).await;

    let catalog = Catalog::site();
    assert_eq!(body["projects"].as_array().unwrap().len(), catalog.projects.len());
    assert_eq!(body["skills"].as_array().unwrap().len(), catalog.skills.len());
    assert_eq!(body["profile"]["contact"]["primary_email"], "rahulshyam2006@outlook.com");
}

#[tokio::test]
async fn favicon_is_no_content() {
    let app = router(&ScriptedProvider::new(), Connectivity::online());
    let resp = app.oneshot(get("/favicon.ico")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn unknown_path_serves_glitch_page() {
    let app = router(&ScriptedProvider::new(), Connectivity::online());
    let resp = app.oneshot(get("/no/such/page")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let html = body_string(resp).await;
    assert!(html.contains("System Glitch."));
    assert!(html.contains("window.location.reload()"));
}
