use actix_web::{HttpResponse, Responder};
use chrono::{SecondsFormat, Utc};

#[derive(serde::Serialize)]
struct HealthStatus {
    status: &'static str,
    timestamp: String,
}

#[tracing::instrument(name = "Health check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
