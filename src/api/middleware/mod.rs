//! HTTP middleware components.
//!
//! - `request_id` - correlation id generation and propagation
//! - `logging` - request/response log lines
//! - `error_handler` - centralized AppError to page conversion

mod error_handler;
mod logging;
mod request_id;

pub use logging::logging_middleware;
pub use request_id::{request_id_middleware, RequestId};
