use serde_json::json;

use crate::helpers::{assert_rejected_without_sending, spawn_app};

const ROUTE: &str = "send-brochure-confirmation";

#[tokio::test]
async fn brochure_confirmation_is_sent_to_the_recipient() {
    let app = spawn_app().await;
    app.provider_accepts("stub-3").await;

    let response = app
        .post_api(
            ROUTE,
            &json!({ "recipientEmail": "a@b.com", "recipientName": "Ada" }),
        )
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "messageId": "stub-3" }));

    let sent = &app.sent_emails().await[0];
    assert_eq!(sent["to"][0]["email"], "a@b.com");
    assert_eq!(sent["subject"], "Your AI Workshop Switzerland brochure");
    assert!(sent["textContent"].as_str().unwrap().contains("Hello Ada"));
}

#[tokio::test]
async fn brochure_confirmation_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let cases = vec![
        (json!({ "recipientName": "Ada" }), "missing the email"),
        (json!({ "recipientEmail": "a@b.com" }), "missing the name"),
        (
            json!({ "recipientEmail": null, "recipientName": "Ada" }),
            "a null email",
        ),
    ];

    assert_rejected_without_sending(&app, ROUTE, cases).await;
}
