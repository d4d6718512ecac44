//! Line-level helpers for the block scanner.

/// Width of a line's leading whitespace, in characters
pub(crate) fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Check if a line is a bullet list item (`- ` or `* ` after indentation)
pub(crate) fn is_bullet_item(line: &str) -> bool {
    let stripped = line.trim_start();
    stripped.starts_with("- ") || stripped.starts_with("* ")
}

/// Check if a line is an ordered list item (`<digits>. ` within the first
/// four characters after indentation)
pub(crate) fn is_ordered_item(line: &str) -> bool {
    let stripped = line.trim_start();
    let leads_with_digit = stripped
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit());
    let window: String = stripped.chars().take(4).collect();
    leads_with_digit && window.contains(". ")
}

/// Check if a line is exactly a thematic break marker
pub(crate) fn is_horizontal_rule(line: &str) -> bool {
    matches!(line.trim(), "---" | "***" | "___")
}
