use std::net::TcpListener;

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::http::{Method, Uri, header};
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing_actix_web::TracingLogger;

use crate::configuration::{EmailClientSettings, Settings};
use crate::delivery::DeliveryClient;
use crate::mailer::Mailer;
use crate::routes::{callable, health_check, notifications};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, anyhow::Error> {
        let mailer = build_mailer(&config.email_client)?;
        let allowed_origins = parse_origins(&config.application.allowed_origins)?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener =
            TcpListener::bind(&address).with_context(|| format!("Failed to bind {address}."))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, mailer, allowed_origins)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// Wires the Brevo client and the configured sender and admin addresses into
/// a [`Mailer`]. Fails when the API key is missing or an address is invalid.
pub fn build_mailer(settings: &EmailClientSettings) -> Result<Mailer, anyhow::Error> {
    let email_client = settings.client()?;
    let sender = settings
        .sender()
        .map_err(anyhow::Error::msg)
        .context("Invalid sender email address.")?;
    let admin = settings
        .admin()
        .map_err(anyhow::Error::msg)
        .context("Invalid admin email address.")?;

    Ok(Mailer::new(DeliveryClient::new(email_client), sender, admin))
}

fn parse_origins(origins: &[String]) -> Result<Vec<String>, anyhow::Error> {
    origins
        .iter()
        .map(|o| o.trim())
        .filter(|o| !o.is_empty())
        .map(|origin| {
            if origin == "*" {
                anyhow::bail!("Wildcard origins cannot be combined with credentials.");
            }
            origin
                .parse::<Uri>()
                .with_context(|| format!("{origin} is not a valid CORS origin."))?;
            Ok(origin.to_owned())
        })
        .collect()
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}

pub fn run(
    listener: TcpListener,
    mailer: Mailer,
    allowed_origins: Vec<String>,
) -> Result<Server, anyhow::Error> {
    let mailer = web::Data::new(mailer);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .app_data(
                        web::JsonConfig::default()
                            .error_handler(notifications::json_error_handler),
                    )
                    .route(
                        "/send-contact-confirmation",
                        web::post().to(notifications::send_contact_confirmation),
                    )
                    .route(
                        "/send-workshop-confirmation",
                        web::post().to(notifications::send_workshop_confirmation),
                    )
                    .route(
                        "/send-brochure-confirmation",
                        web::post().to(notifications::send_brochure_confirmation),
                    )
                    .route(
                        "/send-discovery-call-confirmation",
                        web::post().to(notifications::send_discovery_call_confirmation),
                    )
                    .route(
                        "/send-admin-notification",
                        web::post().to(notifications::send_admin_notification),
                    ),
            )
            .service(
                web::scope("/callable")
                    .app_data(
                        web::JsonConfig::default().error_handler(callable::json_error_handler),
                    )
                    .route("/{name}", web::post().to(callable::call_function)),
            )
            .app_data(mailer.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
