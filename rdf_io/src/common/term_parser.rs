/*!
A small hand-written recursive-descent tokenizer for the N-Triples/N-Quads term grammar (§6:
"one triple per line; `<IRI> <IRI> (<IRI> | _:label | literal) .`"), shared by
[`crate::ntriples`] and [`crate::nquads`] since N-Quads is exactly this grammar plus an optional
fourth term. The teacher generates this class of parser from a `.pest` grammar; none shipped with
this crate's retrieved reference material, so the same token set is recognized by hand here
instead.
*/

use rdf_core::error::{self, Error};
use rdf_core::term::{BlankNode, Literal, Term};
use rdf_iri::Iri;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

pub(crate) struct LineParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    line: usize,
}

impl<'a> LineParser<'a> {
    pub(crate) fn new(input: &'a str, line: usize) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            line,
        }
    }

    fn column(&mut self) -> usize {
        self.chars.peek().map(|(i, _)| *i).unwrap_or(self.input.len()) + 1
    }

    fn fail<S: Into<String>>(&mut self, reason: S) -> Error {
        error::invalid_format_error(self.line, self.column(), reason)
    }

    pub(crate) fn skip_ws(&mut self) {
        while matches!(self.chars.peek(), Some((_, c)) if c.is_whitespace()) {
            let _ = self.chars.next();
        }
    }

    fn next_char(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn expect(&mut self, expected: char) -> Result<(), Error> {
        match self.next_char() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.fail(format!("expected `{expected}`, found `{c}`"))),
            None => Err(self.fail(format!("expected `{expected}`, found end of line"))),
        }
    }

    // ----------------------------------------------------------------------------------------------
    // Terms
    // ----------------------------------------------------------------------------------------------

    pub(crate) fn parse_subject(&mut self) -> Result<Term, Error> {
        self.skip_ws();
        match self.peek_char() {
            Some('<') => Ok(Term::Iri(self.parse_iri_ref()?)),
            Some('_') => Ok(Term::BlankNode(self.parse_blank_node()?)),
            Some(c) => Err(self.fail(format!("expected subject (IRI or blank node), found `{c}`"))),
            None => Err(self.fail("expected subject, found end of line")),
        }
    }

    pub(crate) fn parse_predicate(&mut self) -> Result<Iri, Error> {
        self.skip_ws();
        match self.peek_char() {
            Some('<') => self.parse_iri_ref(),
            Some(c) => Err(self.fail(format!("expected predicate IRI, found `{c}`"))),
            None => Err(self.fail("expected predicate, found end of line")),
        }
    }

    pub(crate) fn parse_object(&mut self) -> Result<Term, Error> {
        self.skip_ws();
        match self.peek_char() {
            Some('<') => Ok(Term::Iri(self.parse_iri_ref()?)),
            Some('_') => Ok(Term::BlankNode(self.parse_blank_node()?)),
            Some('"') => Ok(Term::Literal(self.parse_literal()?)),
            Some(c) => Err(self.fail(format!("expected object (IRI, blank node, or literal), found `{c}`"))),
            None => Err(self.fail("expected object, found end of line")),
        }
    }

    /// An N-Quads fourth term: either absent (statement terminator reached) or an IRI/blank node.
    pub(crate) fn parse_optional_graph_name(&mut self) -> Result<Option<Term>, Error> {
        self.skip_ws();
        match self.peek_char() {
            Some('.') => Ok(None),
            Some('<') => Ok(Some(Term::Iri(self.parse_iri_ref()?))),
            Some('_') => Ok(Some(Term::BlankNode(self.parse_blank_node()?))),
            Some(c) => Err(self.fail(format!("expected graph name or `.`, found `{c}`"))),
            None => Err(self.fail("expected graph name or `.`, found end of line")),
        }
    }

    pub(crate) fn expect_statement_end(&mut self) -> Result<(), Error> {
        self.skip_ws();
        self.expect('.')?;
        self.skip_ws();
        if let Some(c) = self.peek_char() {
            if c != '#' {
                return Err(self.fail(format!("unexpected trailing content `{c}` after `.`")));
            }
        }
        Ok(())
    }

    // ----------------------------------------------------------------------------------------------
    // Lexical forms
    // ----------------------------------------------------------------------------------------------

    fn parse_iri_ref(&mut self) -> Result<Iri, Error> {
        self.expect('<')?;
        let mut raw = String::new();
        loop {
            match self.next_char() {
                Some('>') => break,
                Some('\\') => raw.push(self.parse_unicode_escape()?),
                Some(c) => raw.push(c),
                None => return Err(self.fail("unterminated IRI reference")),
            }
        }
        Iri::from_str(&raw).map_err(|_| self.fail(format!("`{raw}` is not a valid absolute IRI")))
    }

    fn parse_blank_node(&mut self) -> Result<BlankNode, Error> {
        self.expect('_')?;
        self.expect(':')?;
        let mut label = String::new();
        while matches!(self.peek_char(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-') {
            label.push(self.next_char().expect("peeked"));
        }
        if label.is_empty() {
            return Err(self.fail("empty blank node label"));
        }
        Ok(BlankNode::new(label))
    }

    fn parse_literal(&mut self) -> Result<Literal, Error> {
        let lexical = self.parse_quoted_string()?;
        match self.peek_char() {
            Some('@') => {
                let _ = self.next_char();
                let mut tag = String::new();
                while matches!(self.peek_char(), Some(c) if c.is_alphanumeric() || c == '-') {
                    tag.push(self.next_char().expect("peeked"));
                }
                Literal::with_language_str(lexical, &tag)
            }
            Some('^') => {
                let _ = self.next_char();
                self.expect('^')?;
                let datatype = self.parse_iri_ref()?;
                Ok(Literal::with_datatype(lexical, datatype))
            }
            _ => Ok(Literal::new(lexical)),
        }
    }

    fn parse_quoted_string(&mut self) -> Result<String, Error> {
        self.expect('"')?;
        let mut value = String::new();
        loop {
            match self.next_char() {
                Some('"') => break,
                Some('\\') => value.push(self.parse_string_escape()?),
                Some(c) => value.push(c),
                None => return Err(self.fail("unterminated string literal")),
            }
        }
        Ok(value)
    }

    fn parse_string_escape(&mut self) -> Result<char, Error> {
        match self.next_char() {
            Some('t') => Ok('\t'),
            Some('b') => Ok('\u{8}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('f') => Ok('\u{c}'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('\\') => Ok('\\'),
            Some('u') | Some('U') => self.parse_unicode_code_point_after_marker(),
            Some(c) => Err(self.fail(format!("unknown escape sequence `\\{c}`"))),
            None => Err(self.fail("unterminated escape sequence")),
        }
    }

    /// Called with the cursor just past a `\` that turned out to start a `\uXXXX`/`\UXXXXXXXX`
    /// escape (used inside IRIREFs, which do not accept the short-name escapes).
    fn parse_unicode_escape(&mut self) -> Result<char, Error> {
        match self.next_char() {
            Some('u') => self.parse_hex_code_point(4),
            Some('U') => self.parse_hex_code_point(8),
            Some(c) => Err(self.fail(format!("unknown escape sequence `\\{c}` in IRI"))),
            None => Err(self.fail("unterminated escape sequence in IRI")),
        }
    }

    fn parse_unicode_code_point_after_marker(&mut self) -> Result<char, Error> {
        self.parse_hex_code_point(4)
    }

    fn parse_hex_code_point(&mut self, digits: usize) -> Result<char, Error> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.next_char() {
                Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                Some(c) => return Err(self.fail(format!("expected hex digit, found `{c}`"))),
                None => return Err(self.fail("unterminated unicode escape")),
            }
        }
        let code_point = u32::from_str_radix(&hex, 16).expect("validated hex digits");
        char::from_u32(code_point).ok_or_else(|| self.fail(format!("`\\u{hex}` is not a valid Unicode scalar value")))
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_triple_line() {
        let mut parser = LineParser::new(r#"<http://ex/s> <http://ex/p> "42"^^<http://www.w3.org/2001/XMLSchema#integer> ."#, 1);
        let subject = parser.parse_subject().unwrap();
        let predicate = parser.parse_predicate().unwrap();
        let object = parser.parse_object().unwrap();
        parser.expect_statement_end().unwrap();
        assert!(subject.is_iri());
        assert_eq!(predicate.as_str(), "http://ex/p");
        let literal = object.as_literal().unwrap();
        assert_eq!(literal.lexical_form(), "42");
    }

    #[test]
    fn parses_blank_node_subject_and_object() {
        let mut parser = LineParser::new(r#"_:b0 <http://ex/knows> _:b1 ."#, 1);
        assert!(parser.parse_subject().unwrap().is_blank_node());
        let _ = parser.parse_predicate().unwrap();
        assert!(parser.parse_object().unwrap().is_blank_node());
    }

    #[test]
    fn parses_language_tagged_literal() {
        let mut parser = LineParser::new(r#"<http://ex/s> <http://ex/p> "bonjour"@fr ."#, 1);
        let _ = parser.parse_subject().unwrap();
        let _ = parser.parse_predicate().unwrap();
        let object = parser.parse_object().unwrap();
        assert_eq!(object.as_literal().unwrap().language().unwrap().as_str(), "fr");
    }

    #[test]
    fn rejects_unterminated_iri() {
        let mut parser = LineParser::new("<http://ex/s", 3);
        let err = parser.parse_subject().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat { line: 3, .. }));
    }

    #[test]
    fn quad_line_yields_a_graph_name() {
        let mut parser = LineParser::new(r#"<http://ex/s> <http://ex/p> <http://ex/o> <http://ex/g> ."#, 1);
        let _ = parser.parse_subject().unwrap();
        let _ = parser.parse_predicate().unwrap();
        let _ = parser.parse_object().unwrap();
        let graph_name = parser.parse_optional_graph_name().unwrap();
        assert!(graph_name.unwrap().is_iri());
    }
}
