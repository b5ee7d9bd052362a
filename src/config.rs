//! Configuration for docstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{DocError, Result};

/// Main configuration for a docstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// The single document every request resolves to (fixed path policy)
    pub document_path: PathBuf,

    /// When set, locators resolve under this directory instead of the
    /// fixed document path
    pub root_dir: Option<PathBuf>,

    /// Extension of the companion file written next to the document
    pub companion_extension: String,

    /// Create missing parent directories on save
    pub create_parent_dirs: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,

    /// Max accepted request body size (bytes)
    pub max_body_bytes: usize,

    /// Editor entry page served at `/`
    pub index_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document_path: PathBuf::from("./document.json"),
            root_dir: None,
            companion_extension: "elm".to_string(),
            create_parent_dirs: false,
            listen_addr: "127.0.0.1:8080".to_string(),
            max_body_bytes: 16 * 1024 * 1024, // 16 MB
            index_path: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.document_path.as_os_str().is_empty() {
            return Err(DocError::Config("document path must not be empty".to_string()));
        }
        if self.companion_extension.is_empty() {
            return Err(DocError::Config(
                "companion extension must not be empty".to_string(),
            ));
        }
        if self.max_body_bytes == 0 {
            return Err(DocError::Config("max body size must be non-zero".to_string()));
        }
        if let Some(root) = &self.root_dir {
            if root.as_os_str().is_empty() {
                return Err(DocError::Config("root directory must not be empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the fixed document path
    pub fn document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.document_path = path.into();
        self
    }

    /// Resolve locators under a root directory
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = Some(path.into());
        self
    }

    /// Set the companion file extension (without the dot)
    pub fn companion_extension(mut self, ext: impl Into<String>) -> Self {
        self.config.companion_extension = ext.into();
        self
    }

    /// Create missing parent directories on save
    pub fn create_parent_dirs(mut self, enabled: bool) -> Self {
        self.config.create_parent_dirs = enabled;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the request body limit (in bytes)
    pub fn max_body_bytes(mut self, size: usize) -> Self {
        self.config.max_body_bytes = size;
        self
    }

    /// Serve this file as the entry page
    pub fn index_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.index_path = Some(path.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
