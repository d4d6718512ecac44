//! turnup-core - editor document tree and JSON schema
//!
//! This crate provides the typed node tree for the rich-text editor document
//! format. It is used by `turnup` (the Markdown conversion engine) and by any
//! caller that assembles or merges editor documents directly.
//!
//! # Architecture
//!
//! ```text
//! Markdown String ──turnup──▶ ┌──────────────┐
//!                             │              │
//!                             │ Document Tree│ ──serde──▶ Editor JSON
//! Manual assembly ──────────▶ │              │
//!                             └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use turnup_core::{Block, Doc, Mark, Text};
//!
//! let doc = Doc::new(vec![
//!     Block::heading(1, vec![Text::plain("Hello World")]),
//!     Block::paragraph(vec![
//!         Text::plain("This is "),
//!         Text::marked("bold", Mark::Bold),
//!         Text::plain(" text."),
//!     ]),
//! ]);
//!
//! let json = doc.to_json_value().unwrap();
//! assert_eq!(json["type"], "doc");
//! ```

mod ast;

pub use ast::{
    Block, Cell, CodeBlockAttrs, Doc, HeadingAttrs, LinkAttrs, ListItem, Mark, TableRow, Text,
};
