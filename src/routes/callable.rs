//! Remotely-callable functions: `POST /callable/{name}` with `{"data": ...}`,
//! answered with `{"result": ...}` or `{"error": {"status", "message"}}`.

mod callable_handler;
mod errors;
mod types;

pub use callable_handler::call_function;
pub use errors::{CallableError, json_error_handler};
pub use types::{CallableErrorBody, CallableRequest, CallableResponse, ErrorDetails};
