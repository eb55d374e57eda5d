pub mod callable;
mod health_check;
mod helpers;
pub mod notifications;

pub use health_check::health_check;
pub use helpers::error_chain_fmt;
