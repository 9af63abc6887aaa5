//! TEXT value escaping (RFC 5545 section 3.3.11).

/// Escape `\`, `;`, `,` and newlines. Nothing else is touched.
pub fn escape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}
