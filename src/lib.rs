pub mod configuration;
pub mod delivery;
pub mod dispatch;
pub mod domain;
pub mod email_client;
pub mod mailer;
pub mod merge;
pub mod routes;
pub mod startup;
pub mod telemetry;
pub mod templates;
