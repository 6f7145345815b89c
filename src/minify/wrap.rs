//! Optional pass: Line wrapping
//!
//! Reinserts line breaks into minified output so lines stay close to a
//! requested width. Lines are only ever cut after a `}`, so a rule is never
//! split across lines.

/// Wrap minified CSS to approximately `line_length` characters per line.
///
/// A line is cut at the first `}` found at least `line_length` characters
/// after the start of the line. Widths count characters, not bytes.
pub fn wrap_css_lines(css: &str, line_length: usize) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut line_start = 0;
    let mut line_start_char = 0;

    for (char_index, (byte_index, c)) in css.char_indices().enumerate() {
        // Cutting after `}` is always safe
        if c == '}' && char_index - line_start_char >= line_length {
            let line_end = byte_index + c.len_utf8();
            lines.push(&css[line_start..line_end]);
            line_start = line_end;
            line_start_char = char_index + 1;
        }
    }

    if line_start < css.len() {
        lines.push(&css[line_start..]);
    }
    lines.join("\n")
}
