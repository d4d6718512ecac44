//! Fenced code block extraction
//!
//! Fence content is captured verbatim and never re-parsed for inline marks.
//! An unterminated fence flushes whatever was buffered at end of input; there
//! is no error path.

use turnup_core::Block;

use crate::service::TurnupOptions;

/// The fence delimiter
pub(crate) const FENCE: &str = "```";

/// Parse a fenced code block opening at `lines[start]`.
///
/// The language tag is the trimmed text after the opening backticks, falling
/// back to the configured default when absent. Returns the block and the
/// index one past the consumed lines.
pub(crate) fn parse_fence(lines: &[&str], start: usize, options: &TurnupOptions) -> (Block, usize) {
    let opening = lines.get(start).copied().unwrap_or("");
    let tag = opening.strip_prefix(FENCE).map(str::trim).unwrap_or("");
    let language = if tag.is_empty() {
        options.default_language.as_str()
    } else {
        tag
    };

    let mut buffer: Vec<&str> = Vec::new();
    let mut i = start + 1;
    while i < lines.len() {
        if lines[i].starts_with(FENCE) {
            i += 1;
            return (Block::code_block(language, buffer.join("\n")), i);
        }
        buffer.push(lines[i]);
        i += 1;
    }

    // unterminated fence: flush the buffer at end of input
    (Block::code_block(language, buffer.join("\n")), i)
}
