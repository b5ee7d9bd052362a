//! docstore Server Binary
//!
//! Starts the HTTP server for docstore.

use std::sync::Arc;

use clap::Parser;
use docstore::network::Server;
use docstore::{Config, DocumentStore, Handler};
use tracing_subscriber::{fmt, EnvFilter};

/// docstore Server
#[derive(Parser, Debug)]
#[command(name = "docstore-server")]
#[command(about = "Load and save a single editor document over HTTP")]
#[command(version)]
struct Args {
    /// Document file served by LoadFile/SaveFile
    #[arg(short, long, default_value = "./document.json")]
    document: String,

    /// Resolve client paths under this directory instead of a fixed document
    #[arg(short, long)]
    root: Option<String>,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// HTML file served at /
    #[arg(short, long)]
    index: Option<String>,

    /// Extension for companion files written next to the document
    #[arg(long, default_value = "elm")]
    companion_ext: String,

    /// Create missing parent directories on save
    #[arg(long)]
    create_dirs: bool,

    /// Request body limit in MB
    #[arg(short = 'm', long, default_value = "16")]
    max_body_mb: usize,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,docstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    let Some(max_body_bytes) = body_limit_bytes(args.max_body_mb) else {
        tracing::error!(
            "Invalid configuration: body limit of {} MB is too large",
            args.max_body_mb
        );
        std::process::exit(1);
    };

    tracing::info!("docstore Server v{}", docstore::VERSION);
    match &args.root {
        Some(root) => tracing::info!("Root directory: {}", root),
        None => tracing::info!("Document: {}", args.document),
    }
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let mut builder = Config::builder()
        .document_path(&args.document)
        .listen_addr(&args.listen)
        .companion_extension(&args.companion_ext)
        .create_parent_dirs(args.create_dirs)
        .max_body_bytes(max_body_bytes);
    if let Some(root) = &args.root {
        builder = builder.root_dir(root);
    }
    if let Some(index) = &args.index {
        builder = builder.index_path(index);
    }
    let config = builder.build();

    let store = match DocumentStore::from_config(&config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut server = Server::new(config, Handler::new(store));
    if let Err(e) = server.run() {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}

/// Convert a body limit in MB to bytes, `None` if it overflows
fn body_limit_bytes(mb: usize) -> Option<usize> {
    mb.checked_mul(1024 * 1024)
}
