//! # turnup
//!
//! Convert Markdown text to a rich-text editor document tree.
//!
//! This is the ingestion counterpart to HTML-to-Markdown converters: text
//! extracted from uploaded documents (or typed by users) comes in as rough
//! Markdown and goes out as the typed node tree the editor schema expects,
//! ready to serialize as JSON.
//!
//! ## Design
//!
//! The converter is a deterministic, total function: any UTF-8 string
//! produces a well-formed document. Malformed constructs (unterminated
//! fences, tables without separators, unbalanced emphasis) degrade to
//! paragraphs or unmarked text instead of failing, because imported
//! office-document content is routinely imperfect and must never be
//! rejected.
//!
//! ## Example
//!
//! ```rust
//! use turnup::{convert, TurnupService};
//!
//! let doc = convert("# Hello\n\nSome **bold** text.");
//! assert_eq!(doc.content.len(), 2);
//!
//! let service = TurnupService::new();
//! let json = service.convert_json("- one\n- two").unwrap();
//! assert!(json.contains("bulletList"));
//! ```

mod blocks;
mod fence;
mod inline;
mod list;
mod service;
mod table;
mod utilities;

pub use service::{TurnupOptions, TurnupService};
pub use turnup_core::{
    Block, Cell, CodeBlockAttrs, Doc, HeadingAttrs, LinkAttrs, ListItem, Mark, TableRow, Text,
};

/// Error type for turnup operations
#[derive(Debug, thiserror::Error)]
pub enum TurnupError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TurnupError>;

/// Convert Markdown text to a document tree with default options.
///
/// Pure and total; see [`TurnupService::convert`] for the degradation
/// contract.
pub fn convert(markdown: &str) -> Doc {
    TurnupService::new().convert(markdown)
}
