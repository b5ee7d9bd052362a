//! Document Store
//!
//! Loads and saves whole documents on disk.
//!
//! ## Semantics
//! - `load` re-reads the file every time (no caching)
//! - `save` truncates and rewrites the file; it is not atomic, so a failed
//!   write may leave a partial file behind
//! - No locking: concurrent saves to one path race and the last one wins

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{DocError, Result};
use crate::protocol::{DocumentContent, DocumentLocator};

use super::{FixedPath, PathPolicy, RootedPath};

/// Default companion file extension
pub const DEFAULT_COMPANION_EXTENSION: &str = "elm";

/// Stores documents through an injectable path policy
///
/// Holds no document state; the file on disk is the only state.
#[derive(Debug)]
pub struct DocumentStore {
    /// Locator → path resolution
    policy: Box<dyn PathPolicy>,

    /// Extension used for companion files
    companion_extension: String,

    /// Create missing parent directories on save
    create_parent_dirs: bool,
}

impl DocumentStore {
    /// Create a store that serves one fixed document
    pub fn new(document_path: impl Into<PathBuf>) -> Self {
        Self::with_policy(Box::new(FixedPath::new(document_path)))
    }

    /// Create a store with a custom path policy
    pub fn with_policy(policy: Box<dyn PathPolicy>) -> Self {
        Self {
            policy,
            companion_extension: DEFAULT_COMPANION_EXTENSION.to_string(),
            create_parent_dirs: false,
        }
    }

    /// Build the store described by `config`
    ///
    /// A configured root directory selects [`RootedPath`], with the
    /// companion extension reserved; otherwise the fixed document path is
    /// used.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let policy: Box<dyn PathPolicy> = match &config.root_dir {
            Some(root) => {
                Box::new(RootedPath::new(root).reserve_extension(&config.companion_extension))
            }
            None => Box::new(FixedPath::new(&config.document_path)),
        };

        Ok(Self::with_policy(policy)
            .companion_extension(&config.companion_extension)
            .create_parent_dirs(config.create_parent_dirs))
    }

    /// Set the companion file extension (without the dot)
    pub fn companion_extension(mut self, ext: impl Into<String>) -> Self {
        self.companion_extension = ext.into();
        self
    }

    /// Create missing parent directories on save
    pub fn create_parent_dirs(mut self, enabled: bool) -> Self {
        self.create_parent_dirs = enabled;
        self
    }

    /// Resolve a locator to the file it refers to
    pub fn resolve(&self, locator: &DocumentLocator) -> Result<PathBuf> {
        self.policy.resolve(locator)
    }

    /// Load a document
    ///
    /// Fails with `NotFound` if the file does not exist; any other read
    /// failure (including invalid UTF-8) is an I/O error.
    pub fn load(&self, locator: &DocumentLocator) -> Result<DocumentContent> {
        let path = self.resolve(locator)?;
        tracing::debug!("Loading document from {}", path.display());

        let content = fs::read_to_string(&path).map_err(|e| DocError::from_io(&path, e))?;
        Ok(DocumentContent::new(content))
    }

    /// Save a document, replacing any existing content
    pub fn save(&self, locator: &DocumentLocator, content: &DocumentContent) -> Result<()> {
        let path = self.resolve(locator)?;
        self.write_file(&path, content.as_str())
    }

    /// Save a document and, if given and non-empty, its companion text
    ///
    /// The document is written first; a failed companion write is reported
    /// even though the document itself was already replaced.
    pub fn save_with_companion(
        &self,
        locator: &DocumentLocator,
        content: &DocumentContent,
        companion: Option<&str>,
    ) -> Result<()> {
        let path = self.resolve(locator)?;
        self.write_file(&path, content.as_str())?;

        if let Some(text) = companion.filter(|t| !t.is_empty()) {
            let companion_path = self.companion_path(&path);
            self.write_file(&companion_path, text)?;
        }

        Ok(())
    }

    /// Path of the companion file for a resolved document path
    pub fn companion_path(&self, document: &Path) -> PathBuf {
        let candidate = document.with_extension(&self.companion_extension);
        if candidate != document {
            return candidate;
        }

        // Document already carries the companion extension
        let mut name = document.as_os_str().to_owned();
        name.push(".");
        name.push(&self.companion_extension);
        PathBuf::from(name)
    }

    fn write_file(&self, path: &Path, text: &str) -> Result<()> {
        tracing::debug!("Writing {} bytes to {}", text.len(), path.display());

        if self.create_parent_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|source| DocError::IoAt {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        // Save never reports NotFound, a missing parent is an I/O failure
        fs::write(path, text).map_err(|source| DocError::IoAt {
            path: path.to_path_buf(),
            source,
        })
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the path policy
    pub fn policy(&self) -> &dyn PathPolicy {
        self.policy.as_ref()
    }
}
