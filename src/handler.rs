//! Handler Module
//!
//! Orchestrates one request: decode → store → encode.
//!
//! ## Request lifecycle
//! ```text
//! Received ──decode──► store op ──encode──► Completed(Ok)
//!     │                   │
//!     └──── error ────────┴───────────────► Completed(failure)
//! ```
//!
//! Every path ends in an [`Outcome`]; no error escapes as a panic, so one
//! bad request never takes the server down.

use std::sync::Arc;

use crate::error::Result;
use crate::protocol::{
    decode_load_request, decode_save_request, encode_legacy_load_response, encode_load_response,
    encode_save_response, LoadResponse, Outcome, SaveResponse,
};
use crate::store::DocumentStore;

/// Load/save request handlers over a shared store
#[derive(Debug, Clone)]
pub struct Handler {
    store: Arc<DocumentStore>,
}

impl Handler {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Handle a LoadFile request body
    pub fn load(&self, body: &[u8]) -> Outcome {
        tracing::debug!("LoadFile request ({} bytes)", body.len());
        Self::complete("LoadFile", self.try_load(body, encode_load_response))
    }

    /// Handle a GetFile request body, answering with `json_content`
    pub fn load_legacy(&self, body: &[u8]) -> Outcome {
        tracing::debug!("GetFile request ({} bytes)", body.len());
        Self::complete("GetFile", self.try_load(body, encode_legacy_load_response))
    }

    /// Handle a SaveFile request body
    pub fn save(&self, body: &[u8]) -> Outcome {
        tracing::debug!("SaveFile request ({} bytes)", body.len());
        Self::complete("SaveFile", self.try_save(body))
    }

    fn try_load(&self, body: &[u8], encode: fn(&LoadResponse) -> Vec<u8>) -> Result<Vec<u8>> {
        let request = decode_load_request(body)?;
        let content = self.store.load(&request.locator)?;
        tracing::info!("Loaded document ({} bytes)", content.len());
        Ok(encode(&LoadResponse { content }))
    }

    fn try_save(&self, body: &[u8]) -> Result<Vec<u8>> {
        let request = decode_save_request(body)?;
        self.store.save_with_companion(
            &request.locator,
            &request.content,
            request.companion.as_deref(),
        )?;
        tracing::info!("Saved document ({} bytes)", request.content.len());
        Ok(encode_save_response(&SaveResponse))
    }

    fn complete(operation: &str, result: Result<Vec<u8>>) -> Outcome {
        match result {
            Ok(body) => Outcome::ok(body),
            Err(e) => {
                tracing::warn!("{} failed ({}): {}", operation, e.kind(), e);
                Outcome::failure(&e)
            }
        }
    }

    /// Get the underlying store
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }
}
