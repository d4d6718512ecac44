//! Editor document tree
//!
//! This module defines the node types for the rich-text editor document
//! schema. The tree is the common output format of every converter frontend;
//! its serde derives produce the exact JSON shape the editor consumes, so the
//! tag and field names here are a compatibility contract and must not change.

use serde::Serialize;

/// The document root.
///
/// Serializes as `{"type": "doc", "content": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "doc")]
pub struct Doc {
    pub content: Vec<Block>,
}

impl Doc {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    /// Append another document's blocks onto this one.
    ///
    /// This is the import workflow: newly converted content is concatenated
    /// onto an existing page, in order, with no semantic merge.
    pub fn append(&mut self, other: Doc) {
        self.content.extend(other.content);
    }

    /// Serialize the tree to a JSON value.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// A block-level node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    /// Heading with level (1-3) and inline content
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Text>,
    },

    /// Paragraph containing inline content
    Paragraph { content: Vec<Text> },

    /// Unordered list
    BulletList { content: Vec<ListItem> },

    /// Ordered list
    OrderedList { content: Vec<ListItem> },

    /// Block quote holding its text as a single paragraph
    Blockquote { content: Vec<Block> },

    /// Fenced code block with exactly one unformatted text child
    CodeBlock {
        attrs: CodeBlockAttrs,
        content: Vec<Text>,
    },

    /// Thematic break
    HorizontalRule,

    /// Table of rows
    Table { content: Vec<TableRow> },
}

impl Block {
    pub fn heading(level: u8, content: Vec<Text>) -> Self {
        Block::Heading {
            attrs: HeadingAttrs { level },
            content,
        }
    }

    pub fn paragraph(content: Vec<Text>) -> Self {
        Block::Paragraph { content }
    }

    pub fn code_block(language: impl Into<String>, code: impl Into<String>) -> Self {
        Block::CodeBlock {
            attrs: CodeBlockAttrs {
                language: language.into(),
            },
            content: vec![Text::plain(code)],
        }
    }
}

/// Attributes of a heading node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadingAttrs {
    pub level: u8,
}

/// Attributes of a code block node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeBlockAttrs {
    pub language: String,
}

/// A list item containing blocks
///
/// The content is one paragraph plus, optionally, one nested list appended
/// after it. Nesting lists inside items is what gives arbitrary list depth.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "listItem")]
pub struct ListItem {
    pub content: Vec<Block>,
}

impl ListItem {
    pub fn new(content: Vec<Block>) -> Self {
        Self { content }
    }

    pub fn from_text(text: Vec<Text>) -> Self {
        Self {
            content: vec![Block::paragraph(text)],
        }
    }
}

/// A table row of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "tableRow")]
pub struct TableRow {
    pub content: Vec<Cell>,
}

impl TableRow {
    pub fn new(content: Vec<Cell>) -> Self {
        Self { content }
    }
}

/// A table cell, either a header or a body cell
///
/// Cell content is block-level (a single paragraph) so the editor can edit
/// cells like any other text region.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Cell {
    #[serde(rename = "tableHeader")]
    Header { content: Vec<Block> },

    #[serde(rename = "tableCell")]
    Body { content: Vec<Block> },
}

impl Cell {
    pub fn header(text: Vec<Text>) -> Self {
        Cell::Header {
            content: vec![Block::paragraph(text)],
        }
    }

    pub fn body(text: Vec<Text>) -> Self {
        Cell::Body {
            content: vec![Block::paragraph(text)],
        }
    }
}

/// An inline text run, optionally carrying a formatting mark
///
/// Text nodes are leaves. A run carries at most one mark; combined emphasis
/// (bold and italic on the same run) is intentionally not modeled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "text")]
pub struct Text {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

impl Text {
    /// An unmarked text run
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: Vec::new(),
        }
    }

    /// A text run carrying a single mark
    pub fn marked(text: impl Into<String>, mark: Mark) -> Self {
        Self {
            text: text.into(),
            marks: vec![mark],
        }
    }
}

/// A formatting mark attached to a text run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mark {
    Bold,
    Italic,
    Code,
    Strike,
    Highlight,
    Link { attrs: LinkAttrs },
}

impl Mark {
    pub fn link(href: impl Into<String>, target: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs {
                href: href.into(),
                target: target.into(),
            },
        }
    }
}

/// Attributes of a link mark
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkAttrs {
    pub href: String,
    pub target: String,
}
