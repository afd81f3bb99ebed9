/*!
The escape policy shared by every text-based format this crate writes (§4.5 "Escape policy"):
backslash, backspace, form-feed, tab, newline, carriage return, and double-quote each get a
two-character escape; every other character passes through untouched.
*/

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Escapes `lexical` for use inside a single-line, double-quoted string (N-Triples/N-Quads, and
/// Turtle's default literal form).
pub(crate) fn escape_basic(lexical: &str) -> String {
    let mut out = String::with_capacity(lexical.len());
    for ch in lexical.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

/// Escapes `lexical` for Turtle's triple-quoted `"""..."""` form: only the backslash and the
/// quote character need escaping (escaping every quote individually rules out an accidental
/// `"""` run ending the string early); a literal newline is left as-is, since that is the entire
/// point of choosing this form.
pub(crate) fn escape_long(lexical: &str) -> String {
    let mut out = String::with_capacity(lexical.len());
    for ch in lexical.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}

pub(crate) fn quote_basic(lexical: &str) -> String {
    format!("\"{}\"", escape_basic(lexical))
}

pub(crate) fn quote_long(lexical: &str) -> String {
    format!("\"\"\"{}\"\"\"", escape_long(lexical))
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_basic_covers_every_listed_character() {
        let escaped = escape_basic("a\\b\u{8}\u{c}\t\n\r\"z");
        assert_eq!(escaped, "a\\\\b\\b\\f\\t\\n\\r\\\"z");
    }

    #[test]
    fn escape_long_preserves_literal_newlines() {
        let escaped = escape_long("line one\nline two");
        assert_eq!(escaped, "line one\nline two");
    }

    #[test]
    fn escape_long_still_escapes_a_closing_triple_quote() {
        let escaped = escape_long("a\"\"\"b");
        assert_eq!(escaped, "a\\\"\\\"\\\"b");
    }
}
