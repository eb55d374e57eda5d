use serde_json::json;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, header_exists, method, path},
};

use crate::helpers::{PROVIDER_PATH, assert_rejected_without_sending, spawn_app};

const ROUTE: &str = "send-contact-confirmation";

fn valid_body() -> serde_json::Value {
    json!({
        "recipientEmail": "a@b.com",
        "recipientName": "Ada",
        "message": "Hello"
    })
}

#[tokio::test]
async fn contact_confirmation_returns_the_provider_message_id() {
    let app = spawn_app().await;

    Mock::given(path(PROVIDER_PATH))
        .and(method("POST"))
        .and(header_exists("api-key"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "messageId": "stub-1" })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_api(ROUTE, &valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "messageId": "stub-1" }));
}

#[tokio::test]
async fn contact_confirmation_merges_name_and_message_into_the_email() {
    let app = spawn_app().await;
    app.provider_accepts("stub-1").await;

    app.post_api(ROUTE, &valid_body()).await;

    let sent = &app.sent_emails().await[0];
    let html = sent["htmlContent"].as_str().unwrap();
    let text = sent["textContent"].as_str().unwrap();
    assert!(html.contains("Hello") && html.contains("Ada"));
    assert!(text.contains("Hello") && text.contains("Ada"));
    assert!(!html.contains("{{"));
    assert_eq!(sent["to"], json!([{ "email": "a@b.com", "name": "Ada" }]));
    assert_eq!(
        sent["sender"],
        json!({ "email": "info@aiworkshop.ch", "name": "AI Workshop Switzerland" })
    );
    assert_eq!(sent["subject"], "Thank you for contacting AI Workshop Switzerland");
}

#[tokio::test]
async fn contact_confirmation_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let cases = vec![
        (
            json!({ "recipientName": "Ada", "message": "Hello" }),
            "missing the email",
        ),
        (
            json!({ "recipientEmail": "a@b.com", "message": "Hello" }),
            "missing the name",
        ),
        (
            json!({ "recipientEmail": "a@b.com", "recipientName": "Ada" }),
            "missing the message",
        ),
        (
            json!({ "recipientEmail": "", "recipientName": "Ada", "message": "Hello" }),
            "an empty email",
        ),
        (json!({}), "missing every field"),
    ];

    assert_rejected_without_sending(&app, ROUTE, cases).await;
}

#[tokio::test]
async fn provider_failure_is_reported_with_200() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "unauthorized",
            "message": "Key not found"
        })))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_api(ROUTE, &valid_body()).await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Key not found"));
    assert!(body.get("messageId").is_none());
}

#[tokio::test]
async fn malformed_json_is_rejected_with_400() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .api_client
        .post(format!("{}/api/{}", &app.address, ROUTE))
        .header("Content-Type", "application/json")
        .body("{ not json")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}
