use serde_json::json;

use crate::helpers::{assert_rejected_without_sending, spawn_app};

const ROUTE: &str = "send-workshop-confirmation";

#[tokio::test]
async fn supplied_booking_fields_are_merged_and_others_left_as_placeholders() {
    let app = spawn_app().await;
    app.provider_accepts("stub-2").await;

    let response = app
        .post_api(
            ROUTE,
            &json!({
                "recipientEmail": "a@b.com",
                "recipientName": "Ada",
                "bookingData": { "workshopType": "AI Fundamentals" }
            }),
        )
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "success": true, "messageId": "stub-2" }));

    let sent = &app.sent_emails().await[0];
    let html = sent["htmlContent"].as_str().unwrap();
    assert!(html.contains("AI Fundamentals"));
    assert!(!html.contains("{{workshopType}}"));
    assert!(html.contains("{{preferredDate}}"));
    assert!(html.contains("{{locationPreference}}"));
}

#[tokio::test]
async fn full_booking_leaves_no_placeholders() {
    let app = spawn_app().await;
    app.provider_accepts("stub-2").await;

    app.post_api(
        ROUTE,
        &json!({
            "recipientEmail": "a@b.com",
            "recipientName": "Ada",
            "bookingData": {
                "workshopType": "AI for Leaders",
                "preferredDate": "2026-11-12",
                "preferredTime": "09:00",
                "numberOfParticipants": 14,
                "locationPreference": "Zurich"
            }
        }),
    )
    .await;

    let sent = &app.sent_emails().await[0];
    for content in ["htmlContent", "textContent"] {
        let body = sent[content].as_str().unwrap();
        assert!(!body.contains("{{"), "{content} still has placeholders");
        assert!(body.contains("14"));
        assert!(body.contains("Zurich"));
    }
}

#[tokio::test]
async fn workshop_confirmation_returns_400_when_data_is_missing() {
    let app = spawn_app().await;

    let cases = vec![
        (
            json!({ "recipientName": "Ada", "bookingData": {} }),
            "missing the email",
        ),
        (
            json!({ "recipientEmail": "a@b.com", "bookingData": {} }),
            "missing the name",
        ),
        (
            json!({ "recipientEmail": "a@b.com", "recipientName": "Ada" }),
            "missing the booking data",
        ),
        (
            json!({ "recipientEmail": "a@b.com", "recipientName": "Ada", "bookingData": null }),
            "null booking data",
        ),
    ];

    assert_rejected_without_sending(&app, ROUTE, cases).await;
}
