//! Inline formatting tokenizer
//!
//! Turns one run of text into a sequence of plain and marked text nodes. A
//! single alternation is evaluated left to right; alternative order is the
//! priority order, so at any position the first matching token wins and the
//! scan resumes after it. Marks never nest or combine.

use once_cell::sync::Lazy;
use regex::Regex;

use turnup_core::{Mark, Text};

use crate::service::TurnupOptions;

// Priority order: link, autolink, code, highlight, strike, bold, italic.
static INLINE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        \[(?P<label>[^\]]+)\]\((?P<href>[^)]+)\)        # [text](url)
        | (?P<auto>https?://[^\s<>)]+ | www\.[^\s<>)]+) # bare URL
        | `(?P<code>[^`]+)`
        | ==(?P<highlight>[^=]+)==
        | ~~(?P<strike>[^~]+)~~
        | \*\*(?P<bold>[^*]+)\*\*
        | \*(?P<italic>[^*]+)\*
        ",
    )
    .expect("inline token pattern compiles")
});

/// Tokenize a run of text into inline nodes.
///
/// Empty input yields an empty vec. Text between tokens, and any trailing
/// unmatched text, is flushed as unmarked runs; unbalanced delimiters simply
/// never match and stay plain.
pub(crate) fn format_inline(text: &str, options: &TurnupOptions) -> Vec<Text> {
    let mut nodes = Vec::new();
    let mut last = 0;

    for caps in INLINE_TOKEN.captures_iter(text) {
        let Some(token) = caps.get(0) else { continue };

        if token.start() > last {
            nodes.push(Text::plain(&text[last..token.start()]));
        }

        if let (Some(label), Some(href)) = (caps.name("label"), caps.name("href")) {
            nodes.push(Text::marked(
                label.as_str(),
                Mark::link(href.as_str(), options.link_target.as_str()),
            ));
        } else if let Some(auto) = caps.name("auto") {
            // bare www. links get a scheme so the editor can follow them
            let url = auto.as_str();
            let href = if url.starts_with("www.") {
                format!("https://{url}")
            } else {
                url.to_string()
            };
            nodes.push(Text::marked(
                url,
                Mark::link(href, options.link_target.as_str()),
            ));
        } else if let Some(code) = caps.name("code") {
            nodes.push(Text::marked(code.as_str(), Mark::Code));
        } else if let Some(highlight) = caps.name("highlight") {
            nodes.push(Text::marked(highlight.as_str(), Mark::Highlight));
        } else if let Some(strike) = caps.name("strike") {
            nodes.push(Text::marked(strike.as_str(), Mark::Strike));
        } else if let Some(bold) = caps.name("bold") {
            nodes.push(Text::marked(bold.as_str(), Mark::Bold));
        } else if let Some(italic) = caps.name("italic") {
            nodes.push(Text::marked(italic.as_str(), Mark::Italic));
        }

        last = token.end();
    }

    if last < text.len() {
        nodes.push(Text::plain(&text[last..]));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(text: &str) -> Vec<Text> {
        format_inline(text, &TurnupOptions::default())
    }

    #[test]
    fn test_empty_text() {
        assert!(format("").is_empty());
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(format("just words"), vec![Text::plain("just words")]);
    }

    #[test]
    fn test_bold_run() {
        assert_eq!(
            format("Hello **world**."),
            vec![
                Text::plain("Hello "),
                Text::marked("world", Mark::Bold),
                Text::plain("."),
            ]
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            format("an *aside* here"),
            vec![
                Text::plain("an "),
                Text::marked("aside", Mark::Italic),
                Text::plain(" here"),
            ]
        );
    }

    #[test]
    fn test_code_beats_emphasis() {
        assert_eq!(
            format("`**raw**`"),
            vec![Text::marked("**raw**", Mark::Code)]
        );
    }

    #[test]
    fn test_highlight_and_strike() {
        assert_eq!(
            format("==note== and ~~gone~~"),
            vec![
                Text::marked("note", Mark::Highlight),
                Text::plain(" and "),
                Text::marked("gone", Mark::Strike),
            ]
        );
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            format("[docs](https://example.com/docs)"),
            vec![Text::marked(
                "docs",
                Mark::link("https://example.com/docs", "_blank"),
            )]
        );
    }

    #[test]
    fn test_autolink_http() {
        assert_eq!(
            format("see https://example.com now"),
            vec![
                Text::plain("see "),
                Text::marked(
                    "https://example.com",
                    Mark::link("https://example.com", "_blank"),
                ),
                Text::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_autolink_www_synthesizes_scheme() {
        assert_eq!(
            format("www.example.com"),
            vec![Text::marked(
                "www.example.com",
                Mark::link("https://www.example.com", "_blank"),
            )]
        );
    }

    #[test]
    fn test_autolink_stops_at_paren() {
        assert_eq!(
            format("(https://example.com)"),
            vec![
                Text::plain("("),
                Text::marked(
                    "https://example.com",
                    Mark::link("https://example.com", "_blank"),
                ),
                Text::plain(")"),
            ]
        );
    }

    #[test]
    fn test_unbalanced_delimiters_stay_plain() {
        assert_eq!(format("**dangling"), vec![Text::plain("**dangling")]);
        assert_eq!(format("~~half"), vec![Text::plain("~~half")]);
    }

    #[test]
    fn test_single_mark_per_run() {
        // nested emphasis is not modeled; the scan takes the first italic
        // token it can close and leaves the stray delimiters plain
        assert_eq!(
            format("**bold *inner* bold**"),
            vec![
                Text::plain("*"),
                Text::marked("bold ", Mark::Italic),
                Text::plain("inner"),
                Text::marked(" bold", Mark::Italic),
                Text::plain("*"),
            ]
        );
    }

    #[test]
    fn test_adjacent_tokens() {
        assert_eq!(
            format("**a***b*"),
            vec![
                Text::marked("a", Mark::Bold),
                Text::marked("b", Mark::Italic),
            ]
        );
    }

    #[test]
    fn test_custom_link_target() {
        let options = TurnupOptions {
            link_target: "_self".to_string(),
            ..Default::default()
        };
        assert_eq!(
            format_inline("[x](https://example.com)", &options),
            vec![Text::marked(
                "x",
                Mark::link("https://example.com", "_self"),
            )]
        );
    }
}
