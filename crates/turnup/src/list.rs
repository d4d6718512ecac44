//! Nested list parsing
//!
//! Lists are reconstructed from flat lines using indentation width alone.
//! Each item is exactly one source line; a deeper-indented following line
//! opens a nested list, recursively, with the nested kind inferred from that
//! line independently of the parent's kind.

use turnup_core::{Block, ListItem};

use crate::inline::format_inline;
use crate::service::TurnupOptions;
use crate::utilities::{indent_width, is_bullet_item, is_ordered_item};

/// The two list marker kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListKind {
    Bullet,
    Ordered,
}

impl ListKind {
    /// Infer the kind opened by a line (bullet markers win, anything else
    /// is treated as ordered)
    pub(crate) fn infer(line: &str) -> Self {
        if is_bullet_item(line) {
            ListKind::Bullet
        } else {
            ListKind::Ordered
        }
    }

    fn matches(self, line: &str) -> bool {
        match self {
            ListKind::Bullet => is_bullet_item(line),
            ListKind::Ordered => is_ordered_item(line),
        }
    }

    /// Wrap collected items in the matching list block
    pub(crate) fn wrap(self, items: Vec<ListItem>) -> Block {
        match self {
            ListKind::Bullet => Block::BulletList { content: items },
            ListKind::Ordered => Block::OrderedList { content: items },
        }
    }
}

/// Parse sibling list items starting at `lines[start]`.
///
/// The base indent is taken from the starting line. Blank lines are skipped,
/// shallower lines end the list, same-indent lines of the matching kind
/// become items, and deeper lines not consumed by a nested parse are skipped
/// as drift. Returns the items and the index one past the last consumed line.
pub(crate) fn parse_list(
    lines: &[&str],
    start: usize,
    kind: ListKind,
    options: &TurnupOptions,
) -> (Vec<ListItem>, usize) {
    let base_indent = lines.get(start).map(|l| indent_width(l)).unwrap_or(0);
    let mut items = Vec::new();
    let mut i = start;

    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }

        let indent = indent_width(line);
        if indent < base_indent {
            break;
        }

        if indent == base_indent && kind.matches(line) {
            let text = item_text(line, kind);
            let mut content = vec![Block::paragraph(format_inline(&text, options))];

            // a deeper-indented next line opens a nested list
            if let Some(next) = lines.get(i + 1) {
                if !next.trim().is_empty() && indent_width(next) > indent {
                    let nested_kind = ListKind::infer(next);
                    let (nested, after) = parse_list(lines, i + 1, nested_kind, options);
                    if !nested.is_empty() {
                        content.push(nested_kind.wrap(nested));
                        items.push(ListItem::new(content));
                        i = after;
                        continue;
                    }
                }
            }

            items.push(ListItem::new(content));
            i += 1;
        } else if indent > base_indent {
            // drift left behind by a nested parse; does not end the list
            i += 1;
        } else {
            break;
        }
    }

    (items, i)
}

/// Strip the list marker and trim the item's own text
fn item_text(line: &str, kind: ListKind) -> String {
    let stripped = line.trim_start();
    match kind {
        ListKind::Bullet => stripped.get(2..).unwrap_or("").trim().to_string(),
        ListKind::Ordered => stripped
            .split_once(". ")
            .map(|(_, rest)| rest.trim().to_string())
            .unwrap_or_else(|| stripped.to_string()),
    }
}
