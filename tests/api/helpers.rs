use once_cell::sync::Lazy;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};
use workshop_mailer::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const PROVIDER_PATH: &str = "/v3/smtp/email";

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_api(&self, route: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/api/{}", &self.address, route))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn call_function(&self, name: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}/callable/{}", &self.address, name))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Provider accepts every send and answers with `message_id`.
    pub async fn provider_accepts(&self, message_id: &str) {
        Mock::given(path(PROVIDER_PATH))
            .and(method("POST"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({ "messageId": message_id })),
            )
            .mount(&self.email_server)
            .await;
    }

    /// Bodies of every request the provider received, in order.
    pub async fn sent_emails(&self) -> Vec<serde_json::Value> {
        self.email_server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://127.0.0.1:{port}"),
        email_server,
        api_client: reqwest::Client::new(),
    }
}

/// Asserts that every payload in `cases` is answered with 400 and never
/// reaches the provider.
pub async fn assert_rejected_without_sending(
    app: &TestApp,
    route: &str,
    cases: Vec<(serde_json::Value, &str)>,
) {
    Mock::given(path(PROVIDER_PATH))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (body, description) in cases {
        let response = app.post_api(route, &body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload was {}.",
            description
        );
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(
            body["error"]
                .as_str()
                .unwrap()
                .starts_with("Missing required fields"),
            "unexpected error for {description}: {body}"
        );
    }
}
