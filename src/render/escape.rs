//! LaTeX escaping for free text.

/// Line feeds become a forced line break, padded with spaces.
pub const LINE_BREAK: &str = " \\\\ ";

/// Escape text for verbatim use in a LaTeX document.
///
/// Markup characters are replaced in one left-to-right pass, so text
/// introduced by a replacement is never escaped again. Backslashes pass
/// through unchanged, which lets authors embed LaTeX commands in their text.
#[must_use]
pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '$' => out.push_str("\\$"),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '#' => out.push_str("\\#"),
            '^' => out.push_str("\\textasciicircum{}"),
            '_' => out.push_str("\\_"),
            '~' => out.push_str("\\textasciitilde{}"),
            '\n' => out.push_str(LINE_BREAK),
            other => out.push(other),
        }
    }
    out
}
