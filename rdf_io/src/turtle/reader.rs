/*!
A hand-written recursive-descent Turtle reader. Accepts `@prefix`/`@base` (and their SPARQL-style
`PREFIX`/`BASE` spellings), prefixed names, the `a` keyword, blank-node labels and anonymous
`[ ... ]` nodes, blank-node property lists, `( ... )` collections, and the usual literal forms
(plain, language-tagged, typed, and the bare boolean/integer/decimal/double shorthands) — the
subset of Turtle this crate's own writer emits, plus everything the examples used to build it
against exercise.
*/

use rdf_core::error::{self, Error, Result};
use rdf_core::graph::{Graph, GraphOptions, Triple};
use rdf_core::prefix::PrefixMap;
use rdf_core::term::{BlankNode, Literal, Term};
use rdf_iri::{Iri, Name};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Character Classes
// ------------------------------------------------------------------------------------------------

fn is_name_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_name_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-' || c == '.'
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parses an entire Turtle document into a [`Graph`], carrying forward any `@base`/`@prefix`
/// directives onto the resulting graph's metadata.
pub fn read_graph(input: &str) -> Result<Graph> {
    let mut parser = Parser::new(input);
    parser.parse_document()?;
    Ok(Graph::new(
        parser.triples,
        GraphOptions {
            name: None,
            prefixes: Some(parser.prefixes),
            base_iri: parser.base,
        },
    ))
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    input: &'a str,
    line: usize,
    prefixes: PrefixMap,
    base: Option<Iri>,
    triples: Vec<Triple>,
    blank_node_counter: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            input,
            line: 1,
            prefixes: PrefixMap::default(),
            base: None,
            triples: Vec::new(),
            blank_node_counter: 0,
        }
    }

    // ----------------------------------------------------------------------------------------------
    // Low-level cursor
    // ----------------------------------------------------------------------------------------------

    fn fail<S: Into<String>>(&mut self, reason: S) -> Error {
        let column = self.chars.peek().map(|(i, _)| *i).unwrap_or(self.input.len()) + 1;
        error::invalid_format_error(self.line, column, reason)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        let next = self.chars.next().map(|(_, c)| c);
        if next == Some('\n') {
            self.line += 1;
        }
        next
    }

    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    let _ = self.bump();
                }
                Some('#') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        let _ = self.bump();
                    }
                }
                _ => break,
            }
        }
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        self.skip_trivia();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.fail(format!("expected `{expected}`, found `{c}`"))),
            None => Err(self.fail(format!("expected `{expected}`, found end of input"))),
        }
    }

    fn at_end(&mut self) -> bool {
        self.skip_trivia();
        self.peek().is_none()
    }

    /// Consumes `keyword` case-insensitively if it appears next (not followed by a name
    /// character), without requiring trailing whitespace to already have been skipped.
    fn try_keyword(&mut self, keyword: &str) -> bool {
        self.skip_trivia();
        let rest = &self.input[self.byte_offset()..];
        if rest.len() < keyword.len() {
            return false;
        }
        if !rest[..keyword.len()].eq_ignore_ascii_case(keyword) {
            return false;
        }
        let next_char = rest[keyword.len()..].chars().next();
        if next_char.is_some_and(is_name_continue) {
            return false;
        }
        for _ in 0..keyword.chars().count() {
            let _ = self.bump();
        }
        true
    }

    fn byte_offset(&mut self) -> usize {
        self.chars.peek().map(|(i, _)| *i).unwrap_or(self.input.len())
    }

    fn fresh_blank_node(&mut self) -> BlankNode {
        self.blank_node_counter += 1;
        BlankNode::new(format!("anon{}", self.blank_node_counter))
    }

    // ----------------------------------------------------------------------------------------------
    // Grammar
    // ----------------------------------------------------------------------------------------------

    fn parse_document(&mut self) -> Result<()> {
        while !self.at_end() {
            if self.try_keyword("@prefix") {
                self.parse_prefix_directive(true)?;
            } else if self.try_keyword("@base") {
                self.parse_base_directive(true)?;
            } else if self.try_keyword("PREFIX") {
                self.parse_prefix_directive(false)?;
            } else if self.try_keyword("BASE") {
                self.parse_base_directive(false)?;
            } else {
                self.parse_triples_block()?;
            }
        }
        Ok(())
    }

    fn parse_prefix_directive(&mut self, requires_dot: bool) -> Result<()> {
        self.skip_trivia();
        let prefix_label = self.parse_prefix_label()?;
        self.expect_char(':')?;
        self.skip_trivia();
        let iri = self.parse_iri_ref()?;
        if requires_dot {
            self.expect_char('.')?;
        }
        if prefix_label.is_empty() {
            self.prefixes.set_default_namespace(iri);
        } else {
            self.prefixes.insert(Name::from_str(&prefix_label)?, iri);
        }
        Ok(())
    }

    fn parse_base_directive(&mut self, requires_dot: bool) -> Result<()> {
        self.skip_trivia();
        let iri = self.parse_iri_ref()?;
        if requires_dot {
            self.expect_char('.')?;
        }
        self.base = Some(iri);
        Ok(())
    }

    fn parse_prefix_label(&mut self) -> Result<String> {
        let mut label = String::new();
        while matches!(self.peek(), Some(c) if is_name_start(c) || is_name_continue(c)) {
            label.push(self.bump().expect("peeked"));
        }
        Ok(label)
    }

    fn parse_triples_block(&mut self) -> Result<()> {
        let subject = self.parse_subject()?;
        self.parse_predicate_object_list(&subject)?;
        self.skip_trivia();
        self.expect_char('.')?;
        Ok(())
    }

    fn parse_subject(&mut self) -> Result<Term> {
        self.skip_trivia();
        match self.peek() {
            Some('(') => self.parse_collection(),
            Some('[') => self.parse_blank_node_property_list(),
            _ => self.parse_resource(),
        }
    }

    fn parse_predicate_object_list(&mut self, subject: &Term) -> Result<()> {
        loop {
            self.skip_trivia();
            let predicate = self.parse_verb()?;
            self.parse_object_list(subject, &predicate)?;
            self.skip_trivia();
            if self.peek() == Some(';') {
                let _ = self.bump();
                self.skip_trivia();
                // a dangling trailing `;` immediately before `.` or `]` ends the list.
                if matches!(self.peek(), Some('.') | Some(']')) {
                    break;
                }
                continue;
            }
            break;
        }
        Ok(())
    }

    fn parse_verb(&mut self) -> Result<Iri> {
        self.skip_trivia();
        if self.try_keyword("a") {
            return Ok(rdf_vocab::rdf::a_type().clone());
        }
        self.parse_resource_iri()
    }

    fn parse_object_list(&mut self, subject: &Term, predicate: &Iri) -> Result<()> {
        loop {
            let object = self.parse_object()?;
            self.triples.push(Triple::new(subject.clone(), predicate.clone(), object));
            self.skip_trivia();
            if self.peek() == Some(',') {
                let _ = self.bump();
                continue;
            }
            break;
        }
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Term> {
        self.skip_trivia();
        match self.peek() {
            Some('(') => self.parse_collection(),
            Some('[') => self.parse_blank_node_property_list(),
            Some('"') => self.parse_literal(),
            Some(c) if c.is_ascii_digit() || c == '+' || c == '-' => self.parse_numeric_literal(),
            _ => {
                if self.try_keyword("true") {
                    return Ok(Term::Literal(Literal::with_datatype("true", rdf_vocab::xsd::boolean().clone())));
                }
                if self.try_keyword("false") {
                    return Ok(Term::Literal(Literal::with_datatype("false", rdf_vocab::xsd::boolean().clone())));
                }
                self.parse_resource()
            }
        }
    }

    fn parse_collection(&mut self) -> Result<Term> {
        self.expect_char('(')?;
        let mut elements = Vec::new();
        loop {
            self.skip_trivia();
            if self.peek() == Some(')') {
                let _ = self.bump();
                break;
            }
            elements.push(self.parse_object()?);
        }
        let nil = Term::Iri(rdf_vocab::rdf::nil().clone());
        let mut tail = nil;
        for element in elements.into_iter().rev() {
            let node = self.fresh_blank_node();
            let node_term = Term::BlankNode(node);
            self.triples.push(Triple::new(node_term.clone(), rdf_vocab::rdf::first().clone(), element));
            self.triples.push(Triple::new(node_term.clone(), rdf_vocab::rdf::rest().clone(), tail));
            tail = node_term;
        }
        Ok(tail)
    }

    fn parse_blank_node_property_list(&mut self) -> Result<Term> {
        self.expect_char('[')?;
        let node = Term::BlankNode(self.fresh_blank_node());
        self.skip_trivia();
        if self.peek() == Some(']') {
            let _ = self.bump();
            return Ok(node);
        }
        self.parse_predicate_object_list(&node)?;
        self.skip_trivia();
        self.expect_char(']')?;
        Ok(node)
    }

    fn parse_resource(&mut self) -> Result<Term> {
        self.skip_trivia();
        match self.peek() {
            Some('_') => Ok(Term::BlankNode(self.parse_blank_node_label()?)),
            _ => Ok(Term::Iri(self.parse_resource_iri()?)),
        }
    }

    fn parse_resource_iri(&mut self) -> Result<Iri> {
        self.skip_trivia();
        match self.peek() {
            Some('<') => self.parse_iri_ref(),
            _ => self.parse_prefixed_name(),
        }
    }

    fn parse_blank_node_label(&mut self) -> Result<BlankNode> {
        self.expect_char('_')?;
        self.expect_char(':')?;
        let mut label = String::new();
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_' || c == '-' || c == '.') {
            label.push(self.bump().expect("peeked"));
        }
        if label.is_empty() {
            return Err(self.fail("empty blank node label"));
        }
        Ok(BlankNode::new(label))
    }

    fn parse_prefixed_name(&mut self) -> Result<Iri> {
        let mut prefix = String::new();
        while matches!(self.peek(), Some(c) if is_name_start(c) || is_name_continue(c)) {
            prefix.push(self.bump().expect("peeked"));
        }
        self.expect_char(':')?;
        let mut local = String::new();
        while matches!(self.peek(), Some(c) if is_name_continue(c)) {
            local.push(self.bump().expect("peeked"));
        }
        let namespace = if prefix.is_empty() {
            self.prefixes.get_default_namespace().cloned()
        } else {
            self.prefixes.get_namespace(&Name::from_str(&prefix)?).cloned()
        };
        let namespace = namespace.ok_or_else(|| self.fail(format!("unbound prefix `{prefix}`")))?;
        let name = if local.is_empty() {
            None
        } else {
            Some(Name::from_str(&local)?)
        };
        match name {
            Some(name) => {
                use rdf_iri::IriExtra;
                namespace
                    .make_name(name)
                    .ok_or_else(|| self.fail(format!("`{prefix}:{local}` does not resolve to a valid IRI")))
            }
            None => Ok(namespace),
        }
    }

    fn parse_iri_ref(&mut self) -> Result<Iri> {
        self.expect_char('<')?;
        let mut raw = String::new();
        loop {
            match self.bump() {
                Some('>') => break,
                Some('\\') => raw.push(self.parse_unicode_escape()?),
                Some(c) => raw.push(c),
                None => return Err(self.fail("unterminated IRI reference")),
            }
        }
        let resolved = match &self.base {
            Some(base) if Iri::from_str(&raw).is_err() => base
                .join(&raw)
                .map_err(|_| self.fail(format!("`{raw}` does not resolve against the current base")))?,
            _ => Iri::from_str(&raw).map_err(|_| self.fail(format!("`{raw}` is not a valid absolute IRI")))?,
        };
        Ok(resolved)
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let digits = match self.bump() {
            Some('u') => 4,
            Some('U') => 8,
            Some(c) => return Err(self.fail(format!("unknown escape sequence `\\{c}` in IRI"))),
            None => return Err(self.fail("unterminated escape sequence in IRI")),
        };
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.bump() {
                Some(c) if is_hex_digit(c) => hex.push(c),
                Some(c) => return Err(self.fail(format!("expected hex digit, found `{c}`"))),
                None => return Err(self.fail("unterminated unicode escape")),
            }
        }
        let code_point = u32::from_str_radix(&hex, 16).expect("validated hex digits");
        char::from_u32(code_point).ok_or_else(|| self.fail(format!("`\\u{hex}` is not a valid Unicode scalar value")))
    }

    fn parse_literal(&mut self) -> Result<Term> {
        let lexical = self.parse_quoted_string()?;
        self.skip_trivia_without_newline();
        match self.peek() {
            Some('@') => {
                let _ = self.bump();
                let mut tag = String::new();
                while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '-') {
                    tag.push(self.bump().expect("peeked"));
                }
                Ok(Term::Literal(Literal::with_language_str(lexical, &tag)?))
            }
            Some('^') => {
                let _ = self.bump();
                self.expect_char('^')?;
                self.skip_trivia();
                let datatype = self.parse_resource_iri()?;
                Ok(Term::Literal(Literal::with_datatype(lexical, datatype)))
            }
            _ => Ok(Term::Literal(Literal::new(lexical))),
        }
    }

    /// Whitespace between a closing quote and a `@lang`/`^^datatype` suffix must not cross a
    /// statement boundary the way general trivia-skipping would; in practice Turtle never puts
    /// meaningful whitespace there, so this only needs to skip same-line spaces.
    fn skip_trivia_without_newline(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t')) {
            let _ = self.bump();
        }
    }

    fn parse_quoted_string(&mut self) -> Result<String> {
        if self.starts_with("\"\"\"") {
            self.consume_literal("\"\"\"")?;
            return self.parse_long_string('"');
        }
        if self.starts_with("'''") {
            self.consume_literal("'''")?;
            return self.parse_long_string('\'');
        }
        match self.peek() {
            Some('"') => self.parse_short_string('"'),
            Some('\'') => self.parse_short_string('\''),
            _ => Err(self.fail("expected a string literal")),
        }
    }

    fn starts_with(&mut self, text: &str) -> bool {
        self.input[self.byte_offset()..].starts_with(text)
    }

    fn consume_literal(&mut self, text: &str) -> Result<()> {
        for _ in 0..text.chars().count() {
            let _ = self.bump();
        }
        Ok(())
    }

    fn parse_short_string(&mut self, quote: char) -> Result<String> {
        self.expect_char(quote)?;
        let mut value = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => break,
                Some('\\') => value.push(self.parse_string_escape()?),
                Some(c) => value.push(c),
                None => return Err(self.fail("unterminated string literal")),
            }
        }
        Ok(value)
    }

    fn parse_long_string(&mut self, quote: char) -> Result<String> {
        let marker: String = std::iter::repeat(quote).take(3).collect();
        let mut value = String::new();
        loop {
            if self.starts_with(&marker) {
                self.consume_literal(&marker)?;
                break;
            }
            match self.bump() {
                Some('\\') => value.push(self.parse_string_escape()?),
                Some(c) => value.push(c),
                None => return Err(self.fail("unterminated triple-quoted string literal")),
            }
        }
        Ok(value)
    }

    fn parse_string_escape(&mut self) -> Result<char> {
        match self.bump() {
            Some('t') => Ok('\t'),
            Some('b') => Ok('\u{8}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('f') => Ok('\u{c}'),
            Some('"') => Ok('"'),
            Some('\'') => Ok('\''),
            Some('\\') => Ok('\\'),
            Some('u') => self.parse_hex_code_point(4),
            Some('U') => self.parse_hex_code_point(8),
            Some(c) => Err(self.fail(format!("unknown escape sequence `\\{c}`"))),
            None => Err(self.fail("unterminated escape sequence")),
        }
    }

    fn parse_hex_code_point(&mut self, digits: usize) -> Result<char> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            match self.bump() {
                Some(c) if is_hex_digit(c) => hex.push(c),
                Some(c) => return Err(self.fail(format!("expected hex digit, found `{c}`"))),
                None => return Err(self.fail("unterminated unicode escape")),
            }
        }
        let code_point = u32::from_str_radix(&hex, 16).expect("validated hex digits");
        char::from_u32(code_point).ok_or_else(|| self.fail(format!("`\\u{hex}` is not a valid Unicode scalar value")))
    }

    fn parse_numeric_literal(&mut self) -> Result<Term> {
        let mut lexical = String::new();
        if matches!(self.peek(), Some('+') | Some('-')) {
            lexical.push(self.bump().expect("peeked"));
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            lexical.push(self.bump().expect("peeked"));
        }
        let mut is_decimal = false;
        if self.peek() == Some('.') {
            is_decimal = true;
            lexical.push(self.bump().expect("peeked"));
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                lexical.push(self.bump().expect("peeked"));
            }
        }
        let mut is_double = false;
        if matches!(self.peek(), Some('e') | Some('E')) {
            is_double = true;
            lexical.push(self.bump().expect("peeked"));
            if matches!(self.peek(), Some('+') | Some('-')) {
                lexical.push(self.bump().expect("peeked"));
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                lexical.push(self.bump().expect("peeked"));
            }
        }
        let datatype = if is_double {
            rdf_vocab::xsd::double()
        } else if is_decimal {
            rdf_vocab::xsd::decimal()
        } else {
            rdf_vocab::xsd::integer()
        };
        Ok(Term::Literal(Literal::with_datatype(lexical, datatype.clone())))
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_directives_and_a_simple_triple() {
        let document = r#"
            @prefix ex: <http://ex/> .
            ex:alice a ex:Person ; ex:name "Alice" .
        "#;
        let graph = read_graph(document).unwrap();
        assert_eq!(graph.triple_count(), 2);
    }

    #[test]
    fn parses_a_blank_node_property_list_object() {
        let document = r#"
            @prefix ex: <http://ex/> .
            ex:alice ex:address [ ex:city "Springfield" ] .
        "#;
        let graph = read_graph(document).unwrap();
        assert_eq!(graph.triple_count(), 2);
    }

    #[test]
    fn parses_a_collection_into_an_rdf_list() {
        let document = r#"
            @prefix ex: <http://ex/> .
            ex:alice ex:items ( "a" "b" ) .
        "#;
        let graph = read_graph(document).unwrap();
        // two list cells, each contributing rdf:first and rdf:rest, plus the initial triple.
        assert_eq!(graph.triple_count(), 5);
    }

    #[test]
    fn parses_numeric_and_boolean_shorthand() {
        let document = r#"
            @prefix ex: <http://ex/> .
            ex:alice ex:age 42 ; ex:balance -3.5 ; ex:active true .
        "#;
        let graph = read_graph(document).unwrap();
        assert_eq!(graph.triple_count(), 3);
    }

    #[test]
    fn rejects_an_unbound_prefix() {
        let document = "ex:alice ex:name \"x\" .";
        assert!(read_graph(document).is_err());
    }
}
