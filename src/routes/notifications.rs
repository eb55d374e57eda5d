mod errors;
mod notifications_handler;

pub use errors::{NotificationError, json_error_handler};
pub use notifications_handler::*;
