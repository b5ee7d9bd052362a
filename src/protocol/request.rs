//! Request definitions
//!
//! Represents decoded requests from the editor.

/// Identifies which document a request concerns
///
/// The path is advisory: the store's path policy decides where it lands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentLocator {
    pub path: String,
}

impl DocumentLocator {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Full textual payload of a document, opaque to the store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContent {
    pub content: String,
}

impl DocumentContent {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Load the document at `locator`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadRequest {
    pub locator: DocumentLocator,
}

/// Replace the document at `locator` with `content`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRequest {
    pub locator: DocumentLocator,
    pub content: DocumentContent,

    /// Generated rendering of the document, stored next to it
    pub companion: Option<String>,
}

impl LoadRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            locator: DocumentLocator::new(path),
        }
    }
}

impl SaveRequest {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            locator: DocumentLocator::new(path),
            content: DocumentContent::new(content),
            companion: None,
        }
    }

    pub fn with_companion(mut self, companion: impl Into<String>) -> Self {
        self.companion = Some(companion.into());
        self
    }
}
