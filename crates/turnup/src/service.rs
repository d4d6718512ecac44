//! TurnupService - the main entry point for Markdown to document conversion.

use turnup_core::Doc;

use crate::blocks;
use crate::Result;

/// Options for TurnupService
#[derive(Debug, Clone)]
pub struct TurnupOptions {
    /// Language attribute used for fences with no language tag
    pub default_language: String,

    /// Target attribute attached to link marks
    pub link_target: String,
}

impl Default for TurnupOptions {
    fn default() -> Self {
        Self {
            default_language: "text".to_string(),
            link_target: "_blank".to_string(),
        }
    }
}

/// The main service for converting Markdown to an editor document
///
/// The service holds no state besides its options; independent conversions
/// never interact, so one instance can be shared freely across threads.
pub struct TurnupService {
    options: TurnupOptions,
}

impl TurnupService {
    /// Create a new TurnupService with default options
    pub fn new() -> Self {
        Self {
            options: TurnupOptions::default(),
        }
    }

    /// Create a TurnupService with custom options
    pub fn with_options(options: TurnupOptions) -> Self {
        Self { options }
    }

    /// Convert Markdown text to a document tree.
    ///
    /// Total over arbitrary UTF-8 input: malformed constructs degrade to
    /// paragraphs or unmarked text rather than failing. Imported documents
    /// routinely arrive as imperfect Markdown, so this function must never
    /// reject content.
    pub fn convert(&self, markdown: &str) -> Doc {
        blocks::parse_document(markdown, &self.options)
    }

    /// Convert Markdown and serialize the resulting tree to a JSON string
    pub fn convert_json(&self, markdown: &str) -> Result<String> {
        let doc = self.convert(markdown);
        Ok(serde_json::to_string(&doc)?)
    }

    /// Convert Markdown and append the result onto an existing document.
    ///
    /// This is the import workflow: the new content array is concatenated
    /// onto the existing one, with no semantic merge.
    pub fn append(&self, doc: &mut Doc, markdown: &str) {
        doc.append(self.convert(markdown));
    }

    /// Get the current options
    pub fn options(&self) -> &TurnupOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut TurnupOptions {
        &mut self.options
    }
}

impl Default for TurnupService {
    fn default() -> Self {
        Self::new()
    }
}
