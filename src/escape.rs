use std::borrow::Cow;

/// Escape a string for use inside a double-quoted attribute value.
///
/// Besides the markup-reserved characters this also escapes the double
/// quote and the whitespace control characters, so attribute values
/// round-trip through a quoted attribute unchanged. Single quotes are
/// left alone.
pub(crate) fn escape_attribute(value: &str) -> Cow<str> {
    let mut result = String::new();
    let mut entity_seen = false;
    for c in value.chars() {
        match c {
            '&' => {
                entity_seen = true;
                result.push_str("&amp;")
            }
            '<' => {
                entity_seen = true;
                result.push_str("&lt;")
            }
            '>' => {
                entity_seen = true;
                result.push_str("&gt;")
            }
            '"' => {
                entity_seen = true;
                result.push_str("&quot;")
            }
            '\n' => {
                entity_seen = true;
                result.push_str("&#10;")
            }
            '\r' => {
                entity_seen = true;
                result.push_str("&#13;")
            }
            '\t' => {
                entity_seen = true;
                result.push_str("&#9;")
            }
            _ => result.push(c),
        }
    }

    if !entity_seen {
        value.into()
    } else {
        result.into()
    }
}
