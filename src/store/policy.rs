//! Path Policy
//!
//! Decides which file a locator refers to. The caller's path is advisory;
//! the policy is the trust boundary between client input and the filesystem.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{DocError, Result};
use crate::protocol::DocumentLocator;

/// Resolves a locator to a filesystem path
pub trait PathPolicy: Send + Sync + fmt::Debug {
    fn resolve(&self, locator: &DocumentLocator) -> Result<PathBuf>;
}

/// Every locator resolves to one server-chosen file
#[derive(Debug, Clone)]
pub struct FixedPath {
    path: PathBuf,
}

impl FixedPath {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PathPolicy for FixedPath {
    fn resolve(&self, locator: &DocumentLocator) -> Result<PathBuf> {
        if !locator.is_empty() {
            tracing::trace!(
                "Client path {:?} overridden by {}",
                locator.path,
                self.path.display()
            );
        }
        Ok(self.path.clone())
    }
}

/// Locators are relative paths confined to a root directory
///
/// A single leading `/` is accepted and stripped, so `/doc/a` resolves to
/// `<root>/doc/a`. `..`, further root components and empty paths are
/// rejected, as are documents carrying the reserved extension.
#[derive(Debug, Clone)]
pub struct RootedPath {
    root: PathBuf,

    /// Extension no document may carry (the companion file extension)
    reserved_extension: Option<String>,
}

impl RootedPath {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            reserved_extension: None,
        }
    }

    /// Refuse documents whose name ends in `.<ext>`
    ///
    /// Keeps a companion write from landing on another document.
    pub fn reserve_extension(mut self, ext: impl Into<String>) -> Self {
        self.reserved_extension = Some(ext.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn is_reserved(&self, path: &Path) -> bool {
        match (&self.reserved_extension, path.extension()) {
            (Some(reserved), Some(ext)) => ext
                .to_str()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(reserved)),
            _ => false,
        }
    }
}

impl PathPolicy for RootedPath {
    fn resolve(&self, locator: &DocumentLocator) -> Result<PathBuf> {
        if locator.is_empty() {
            return Err(DocError::InvalidLocator("empty path".to_string()));
        }

        let relative = locator.path.strip_prefix('/').unwrap_or(locator.path.as_str());
        let mut resolved = self.root.clone();
        let mut depth = 0usize;

        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => {
                    resolved.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(DocError::InvalidLocator(format!(
                        "{:?}: parent directory references are not allowed",
                        locator.path
                    )));
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(DocError::InvalidLocator(format!(
                        "{:?}: absolute paths are not allowed",
                        locator.path
                    )));
                }
            }
        }

        if depth == 0 {
            return Err(DocError::InvalidLocator(format!(
                "{:?}: path names no document",
                locator.path
            )));
        }

        if self.is_reserved(&resolved) {
            return Err(DocError::InvalidLocator(format!(
                "{:?}: extension is reserved for companion files",
                locator.path
            )));
        }

        Ok(resolved)
    }
}
