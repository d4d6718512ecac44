//! Block dispatcher and tree assembly
//!
//! A single forward-moving line cursor tests each line against the block
//! prefixes in fixed priority order and delegates to the construct parsers.
//! Every handler returns the next cursor position; the assembled document is
//! always well formed and non-empty.

use turnup_core::{Block, Doc};

use crate::fence;
use crate::inline::format_inline;
use crate::list::{self, ListKind};
use crate::service::TurnupOptions;
use crate::table;
use crate::utilities::{indent_width, is_bullet_item, is_horizontal_rule, is_ordered_item};

/// Convert Markdown text into a document tree.
///
/// Total over arbitrary input: unrecognized or malformed constructs degrade
/// to paragraphs, blank lines are consumed silently, and empty input yields a
/// document holding a single empty paragraph.
pub(crate) fn parse_document(markdown: &str, options: &TurnupOptions) -> Doc {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut content: Vec<Block> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        // fence state wins over every other prefix
        if line.starts_with(fence::FENCE) {
            let (block, next) = fence::parse_fence(&lines, i, options);
            content.push(block);
            i = next;
            continue;
        }

        if let Some((level, rest)) = heading_prefix(line) {
            content.push(Block::heading(level, format_inline(rest.trim(), options)));
            i += 1;
            continue;
        }

        if indent_width(line) == 0 && is_bullet_item(line) {
            i = push_list(&lines, i, ListKind::Bullet, options, &mut content);
            continue;
        }

        if indent_width(line) == 0 && is_ordered_item(line) {
            i = push_list(&lines, i, ListKind::Ordered, options, &mut content);
            continue;
        }

        if line.starts_with("> ") {
            let mut quoted: Vec<&str> = Vec::new();
            while i < lines.len() && lines[i].starts_with("> ") {
                quoted.push(lines[i].strip_prefix("> ").unwrap_or(lines[i]));
                i += 1;
            }
            content.push(Block::Blockquote {
                content: vec![Block::paragraph(format_inline(&quoted.join("\n"), options))],
            });
            continue;
        }

        if is_horizontal_rule(line) {
            content.push(Block::HorizontalRule);
            i += 1;
            continue;
        }

        if line.starts_with('|') {
            let (block, next) = table::parse_table(&lines, i, options);
            match block {
                Some(block) => {
                    content.push(block);
                    i = next;
                }
                None => {
                    // a pipe run with no data rows degrades to a paragraph
                    content.push(Block::paragraph(format_inline(line.trim(), options)));
                    i += 1;
                }
            }
            continue;
        }

        if !line.trim().is_empty() {
            content.push(Block::paragraph(format_inline(line.trim(), options)));
        }
        i += 1;
    }

    if content.is_empty() {
        content.push(Block::paragraph(Vec::new()));
    }

    Doc::new(content)
}

/// Match the `#`/`##`/`###` heading prefixes (deeper runs are paragraphs)
fn heading_prefix(line: &str) -> Option<(u8, &str)> {
    for (marker, level) in [("# ", 1), ("## ", 2), ("### ", 3)] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some((level, rest));
        }
    }
    None
}

fn push_list(
    lines: &[&str],
    start: usize,
    kind: ListKind,
    options: &TurnupOptions,
    content: &mut Vec<Block>,
) -> usize {
    let (items, next) = list::parse_list(lines, start, kind, options);
    if items.is_empty() {
        start + 1
    } else {
        content.push(kind.wrap(items));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnup_core::{Mark, Text};

    fn convert(markdown: &str) -> Doc {
        parse_document(markdown, &TurnupOptions::default())
    }

    #[test]
    fn test_empty_input() {
        let doc = convert("");
        assert_eq!(doc, Doc::new(vec![Block::paragraph(vec![])]));
    }

    #[test]
    fn test_whitespace_only_input() {
        let doc = convert("   \n\n  \t ");
        assert_eq!(doc, Doc::new(vec![Block::paragraph(vec![])]));
    }

    #[test]
    fn test_heading_levels() {
        for (source, level) in [("# A", 1), ("## A", 2), ("### A", 3)] {
            let doc = convert(source);
            assert_eq!(
                doc.content,
                vec![Block::heading(level, vec![Text::plain("A")])],
                "for {source:?}"
            );
        }
    }

    #[test]
    fn test_deep_heading_run_is_a_paragraph() {
        let doc = convert("#### too deep");
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Text::plain("#### too deep")])]
        );
    }

    #[test]
    fn test_plain_lines_become_paragraphs() {
        let doc = convert("one\n\ntwo  ");
        assert_eq!(
            doc.content,
            vec![
                Block::paragraph(vec![Text::plain("one")]),
                Block::paragraph(vec![Text::plain("two")]),
            ]
        );
    }

    #[test]
    fn test_heading_inside_fence_is_not_a_heading() {
        let doc = convert("```\n# not a heading\n```");
        assert_eq!(doc.content, vec![Block::code_block("text", "# not a heading")]);
    }

    #[test]
    fn test_blockquote_joins_contiguous_lines() {
        let doc = convert("> first\n> second");
        assert_eq!(
            doc.content,
            vec![Block::Blockquote {
                content: vec![Block::paragraph(vec![Text::plain("first\nsecond")])],
            }]
        );
    }

    #[test]
    fn test_horizontal_rule_variants() {
        for source in ["---", "***", "___"] {
            let doc = convert(source);
            assert_eq!(doc.content, vec![Block::HorizontalRule], "for {source:?}");
        }
    }

    #[test]
    fn test_bullet_list_dispatch() {
        let doc = convert("- a\n- b");
        let Block::BulletList { content } = &doc.content[0] else {
            panic!("expected a bullet list");
        };
        assert_eq!(content.len(), 2);
    }

    #[test]
    fn test_ordered_list_dispatch() {
        let doc = convert("1. a\n2. b");
        assert!(matches!(doc.content[0], Block::OrderedList { .. }));
    }

    #[test]
    fn test_indented_list_line_is_not_dispatched() {
        // list dispatch requires column 0; an indented marker is prose here
        let doc = convert("  - not a list");
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Text::plain("- not a list")])]
        );
    }

    #[test]
    fn test_separator_only_pipe_run_degrades() {
        let doc = convert("|---|");
        assert_eq!(
            doc.content,
            vec![Block::paragraph(vec![Text::plain("|---|")])]
        );
    }

    #[test]
    fn test_mixed_document_order_is_preserved() {
        let doc = convert("# Title\n\nIntro **here**.\n\n---\n\n- a\n- b");
        assert_eq!(doc.content.len(), 4);
        assert!(matches!(doc.content[0], Block::Heading { .. }));
        assert_eq!(
            doc.content[1],
            Block::paragraph(vec![
                Text::plain("Intro "),
                Text::marked("here", Mark::Bold),
                Text::plain("."),
            ])
        );
        assert_eq!(doc.content[2], Block::HorizontalRule);
        assert!(matches!(doc.content[3], Block::BulletList { .. }));
    }

    #[test]
    fn test_table_then_paragraph() {
        let doc = convert("| A | B |\n|---|---|\n| 1 | 2 |\nafter");
        assert!(matches!(doc.content[0], Block::Table { .. }));
        assert_eq!(
            doc.content[1],
            Block::paragraph(vec![Text::plain("after")])
        );
    }
}
