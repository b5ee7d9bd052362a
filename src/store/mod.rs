//! Store Module
//!
//! Persistence for the single edited document.
//!
//! ## Responsibilities
//! - Resolve a locator to a file through a [`PathPolicy`]
//! - Read the whole file as text on load
//! - Replace the whole file on save
//!
//! ## File Layout
//! ```text
//! {document_path}          (latest saved content, verbatim)
//! {document_stem}.{ext}    (optional companion rendering)
//! ```

mod policy;
mod document;

pub use policy::{FixedPath, PathPolicy, RootedPath};
pub use document::{DocumentStore, DEFAULT_COMPANION_EXTENSION};
