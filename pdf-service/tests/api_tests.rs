mod common;

use auth::JwtHandler;
use auth::UserClaims;
use common::test_claims;
use common::TestApp;
use common::TEST_SECRET;
use common::TEST_TTL_MINUTES;
use serde_json::json;
use serde_json::Value;

#[tokio::test]
async fn test_download_returns_pdf_for_valid_token() {
    let app = TestApp::spawn().await;
    let (claims, token) = app.valid_token();

    let response = app
        .get("/api/pdf/download")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(
        response.headers()["content-disposition"].to_str().unwrap(),
        format!("attachment; filename=profile_{}.pdf", claims.id)
    );
    assert_eq!(
        response.headers()["access-control-expose-headers"]
            .to_str()
            .unwrap(),
        "Content-Disposition"
    );

    let bytes = response.bytes().await.unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn test_download_without_header_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/pdf/download")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Auth Error");
    assert_eq!(body["message"], "Missing or invalid Authorization header");
}

#[tokio::test]
async fn test_download_with_wrong_scheme_is_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.valid_token();

    let response = app
        .get("/api/pdf/download")
        .header("Authorization", format!("Basic {}", token))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Missing or invalid Authorization header");
}

#[tokio::test]
async fn test_download_with_garbage_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/pdf/download")
        .bearer_auth("not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Auth Error");
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_download_with_wrong_secret_is_rejected() {
    let app = TestApp::spawn().await;

    let other = JwtHandler::new(b"a-completely-different-signing-secret!!", TEST_TTL_MINUTES);
    let token = other.encode(&test_claims()).unwrap();

    let response = app
        .get("/api/pdf/download")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_download_with_expired_token_is_rejected() {
    let app = TestApp::spawn().await;

    let expired = JwtHandler::new(TEST_SECRET, -5);
    let token = expired.encode(&test_claims()).unwrap();

    let response = app
        .get("/api/pdf/download")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_download_with_mismatched_schema_is_rejected() {
    let app = TestApp::spawn().await;

    // Correctly signed, but the payload lacks the profile fields the guard
    // deserializes into
    let signer = JwtHandler::new(TEST_SECRET, TEST_TTL_MINUTES);
    let token = signer
        .encode(&json!({"sub": "someone", "role": "admin"}))
        .unwrap();

    let response = app
        .get("/api/pdf/download")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_download_with_tampered_token_is_rejected() {
    let app = TestApp::spawn().await;
    let (_, token) = app.valid_token();

    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    let mut payload: Vec<char> = parts[1].chars().collect();
    payload[0] = if payload[0] == 'A' { 'B' } else { 'A' };
    parts[1] = payload.into_iter().collect();
    let tampered = parts.join(".");

    let response = app
        .get("/api/pdf/download")
        .bearer_auth(&tampered)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_enqueue_records_task_for_valid_token() {
    let app = TestApp::spawn().await;
    let (claims, token) = app.valid_token();

    let response = app
        .post("/api/pdf/enqueue")
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 202);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "queued");
    assert_eq!(body["id"], claims.id.to_string());

    let sent = app.queue.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let queued: UserClaims = serde_json::from_str(&sent[0]).unwrap();
    assert_eq!(queued.email, claims.email);
    assert_eq!(queued.id, claims.id);
}

#[tokio::test]
async fn test_enqueue_without_token_is_rejected() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/pdf/enqueue")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 401);
    assert!(app.queue.sent.lock().unwrap().is_empty());
}
