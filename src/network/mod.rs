//! Network Module
//!
//! HTTP transport in front of the handlers.
//!
//! ## Architecture
//! - axum router on a multi-threaded tokio runtime
//! - Each request is an independent task
//! - Blocking store I/O runs on the blocking pool
//! - Outcome statuses are mapped to HTTP status codes here and nowhere else

mod server;
mod routes;

pub use server::Server;
pub use routes::{router, status_code, AppState};
