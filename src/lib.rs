//! # docstore
//!
//! A single-document persistence service for a structured editor:
//! - Load and save one source document over HTTP
//! - JSON wire format with tolerant decoding
//! - Server-controlled path resolution (client paths are advisory)
//! - Last-write-wins, no locking, no history
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    HTTP Transport (axum)                     │
//! │        /LoadFile   /SaveFile   / (entry page)                │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ raw body
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Handler                               │
//! │             decode → store → encode → Outcome                │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌───────────────────┐
//!   │   Wire Codec    │               │  Document Store   │
//!   │     (JSON)      │               │  (PathPolicy→fs)  │
//!   └─────────────────┘               └───────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod store;
pub mod handler;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DocError, Result};
pub use config::Config;
pub use handler::Handler;
pub use store::DocumentStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of docstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
