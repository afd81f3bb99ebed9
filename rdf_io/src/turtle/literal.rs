/*!
Turtle literal rendering (§4.5 step 6): the canonical lexical shorthand for booleans, integers,
doubles, and decimals when the literal's lexical form is valid for its datatype, falling back to
an explicit quoted-and-typed form otherwise. Language-tagged literals always use `"lex"@tag`.
*/

use crate::common::literal::{quote_basic, quote_long};
use rdf_core::term::Literal;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Renders `literal` the way it should appear as a Turtle object: bare canonical shorthand when
/// one applies, `"lex"@tag` for language-tagged literals, or a caller-supplied `render_iri` for
/// the `^^<datatype>`/`^^prefix:name` suffix of an explicitly-typed fallback.
pub(crate) fn render(literal: &Literal, render_datatype: impl Fn(&rdf_iri::Iri) -> String) -> String {
    if let Some(language) = literal.language() {
        return format!("{}@{language}", quote_basic(literal.lexical_form()));
    }
    if let Some(shorthand) = canonical_shorthand(literal) {
        return shorthand;
    }
    if literal.datatype() == rdf_vocab::xsd::string() {
        let lexical = literal.lexical_form();
        if lexical.contains('\n') || lexical.contains('\r') {
            return quote_long(lexical);
        }
        return quote_basic(lexical);
    }
    format!("{}^^{}", quote_basic(literal.lexical_form()), render_datatype(literal.datatype()))
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn canonical_shorthand(literal: &Literal) -> Option<String> {
    let datatype = literal.datatype();
    let lexical = literal.lexical_form();
    if datatype == rdf_vocab::xsd::boolean() {
        canonical_boolean(lexical)
    } else if datatype == rdf_vocab::xsd::integer() {
        canonical_integer(lexical)
    } else if datatype == rdf_vocab::xsd::decimal() {
        canonical_decimal(lexical)
    } else if datatype == rdf_vocab::xsd::double() {
        canonical_double(lexical)
    } else {
        None
    }
}

fn canonical_boolean(lexical: &str) -> Option<String> {
    match lexical {
        "true" | "1" => Some("true".to_string()),
        "false" | "0" => Some("false".to_string()),
        _ => None,
    }
}

fn canonical_integer(lexical: &str) -> Option<String> {
    lexical.trim().parse::<i64>().ok().map(|value| value.to_string())
}

fn canonical_decimal(lexical: &str) -> Option<String> {
    let trimmed = lexical.trim();
    if !trimmed.contains('.') || trimmed.contains(['e', 'E']) {
        return None;
    }
    let value: f64 = trimmed.parse().ok()?;
    let (sign, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        ("-", rest)
    } else {
        ("", trimmed.strip_prefix('+').unwrap_or(trimmed))
    };
    let (int_part, frac_part) = digits.split_once('.')?;
    let int_part = if int_part.is_empty() { "0" } else { int_part.trim_start_matches('0') };
    let int_part = if int_part.is_empty() { "0" } else { int_part };
    let frac_part = frac_part.trim_end_matches('0');
    let frac_part = if frac_part.is_empty() { "0" } else { frac_part };
    let _ = value; // parse validated well-formedness; rendering uses the trimmed textual form.
    Some(format!("{sign}{int_part}.{frac_part}"))
}

fn canonical_double(lexical: &str) -> Option<String> {
    let trimmed = lexical.trim();
    let value: f64 = trimmed.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    if value == 0.0 {
        return Some(if value.is_sign_negative() { "-0.0E0".to_string() } else { "0.0E0".to_string() });
    }
    let mut exponent = value.abs().log10().floor() as i32;
    let mut mantissa = value / 10f64.powi(exponent);
    // guard against log10 rounding landing one exponent off.
    if mantissa.abs() >= 10.0 {
        mantissa /= 10.0;
        exponent += 1;
    } else if mantissa.abs() < 1.0 {
        mantissa *= 10.0;
        exponent -= 1;
    }
    let mantissa_str = format!("{mantissa}");
    let mantissa_str = if mantissa_str.contains('.') { mantissa_str } else { format!("{mantissa_str}.0") };
    Some(format!("{mantissa_str}E{exponent}"))
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_shorthand_normalizes_numeric_forms() {
        assert_eq!(canonical_boolean("1"), Some("true".to_string()));
        assert_eq!(canonical_boolean("0"), Some("false".to_string()));
        assert_eq!(canonical_boolean("yes"), None);
    }

    #[test]
    fn integer_shorthand_strips_a_leading_plus() {
        assert_eq!(canonical_integer("+42"), Some("42".to_string()));
        assert_eq!(canonical_integer("not a number"), None);
    }

    #[test]
    fn decimal_shorthand_trims_trailing_zeros_but_keeps_one_digit() {
        assert_eq!(canonical_decimal("3.1400"), Some("3.14".to_string()));
        assert_eq!(canonical_decimal("3.00"), Some("3.0".to_string()));
        assert_eq!(canonical_decimal("3"), None, "an integer-looking lexical has no decimal point");
    }

    #[test]
    fn double_shorthand_uses_scientific_notation() {
        assert_eq!(canonical_double("100"), Some("1.0E2".to_string()));
        assert_eq!(canonical_double("0.5"), Some("5.0E-1".to_string()));
    }

    #[test]
    fn a_string_literal_with_an_embedded_newline_renders_triple_quoted() {
        let literal = Literal::new("line one\nline two");
        let rendered = render(&literal, |_| unreachable!("xsd:string never needs a datatype suffix"));
        assert_eq!(rendered, "\"\"\"line one\nline two\"\"\"");
    }

    #[test]
    fn a_string_literal_without_a_newline_stays_single_quoted() {
        let literal = Literal::new("plain");
        let rendered = render(&literal, |_| unreachable!("xsd:string never needs a datatype suffix"));
        assert_eq!(rendered, "\"plain\"");
    }
}
