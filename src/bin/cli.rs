//! docstore CLI
//!
//! Loads and saves documents locally through the same handlers the HTTP
//! server uses, so the output is exactly what a client would receive.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use docstore::protocol::{
    decode_load_response, encode_load_request, encode_save_request, LoadRequest, Outcome,
    SaveRequest,
};
use docstore::{Config, DocumentStore, Handler};
use tracing_subscriber::{fmt, EnvFilter};

/// docstore CLI
#[derive(Parser, Debug)]
#[command(name = "docstore-cli")]
#[command(about = "CLI for the docstore document service")]
struct Args {
    /// Document file
    #[arg(short, long, default_value = "./document.json")]
    document: PathBuf,

    /// Resolve --path under this directory instead of a fixed document
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Create missing parent directories on save
    #[arg(long)]
    create_dirs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the document
    Load {
        /// Document path sent with the request
        #[arg(short, long, default_value = "")]
        path: String,

        /// Print only the document content instead of the response body
        #[arg(long)]
        raw: bool,
    },

    /// Save the document
    Save {
        /// Document path sent with the request
        #[arg(short, long, default_value = "")]
        path: String,

        /// Content to save
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        content: Option<String>,

        /// Read content to save from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Read companion text from a file
        #[arg(long)]
        companion_file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut builder = Config::builder()
        .document_path(&args.document)
        .create_parent_dirs(args.create_dirs);
    if let Some(root) = &args.root {
        builder = builder.root_dir(root);
    }

    let store = match DocumentStore::from_config(&builder.build()) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let handler = Handler::new(store);

    match args.command {
        Commands::Load { path, raw } => {
            let outcome = handler.load(&encode_load_request(&LoadRequest::new(path)));
            if raw && outcome.is_success() {
                return match decode_load_response(&outcome.body) {
                    Ok(response) => {
                        print!("{}", response.content.as_str());
                        ExitCode::SUCCESS
                    }
                    Err(e) => {
                        eprintln!("error: {}", e);
                        ExitCode::FAILURE
                    }
                };
            }
            report(outcome)
        }
        Commands::Save {
            path,
            content,
            file,
            companion_file,
        } => {
            let content = match content.or_else(|| file.as_deref().and_then(read_text)) {
                Some(text) => text,
                None => return ExitCode::FAILURE,
            };

            let mut request = SaveRequest::new(path, content);
            if let Some(file) = companion_file {
                match read_text(&file) {
                    Some(text) => request = request.with_companion(text),
                    None => return ExitCode::FAILURE,
                }
            }

            report(handler.save(&encode_save_request(&request)))
        }
    }
}

fn read_text(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Some(text),
        Err(e) => {
            eprintln!("error: failed to read {}: {}", path.display(), e);
            None
        }
    }
}

/// Print the response body; failures go to stderr
fn report(outcome: Outcome) -> ExitCode {
    let body = String::from_utf8_lossy(&outcome.body);
    if outcome.is_success() {
        println!("{}", body);
        ExitCode::SUCCESS
    } else {
        eprintln!("{}", body);
        ExitCode::FAILURE
    }
}
