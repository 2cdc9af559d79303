//! Output sanitization utilities.
//!
//! Validation does not stop every markup-capable string (an email such as
//! `x<b>@y.z` passes), so any caller embedding record fields into HTML must
//! escape them first.

/// Escape the five HTML-significant characters.
///
/// # Examples
///
/// ```
/// use student_roster::validation::escape_html;
///
/// assert_eq!(escape_html("<b>Tom & 'Jo'</b>"), "&lt;b&gt;Tom &amp; &#39;Jo&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_html("Ann Lee"), "Ann Lee");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(escape_html(r#"a"b"#), "a&quot;b");
    }
}
