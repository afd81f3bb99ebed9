/*!
Commonly used terms from the RDF namespace itself, `http://www.w3.org/1999/02/22-rdf-syntax-ns#`.
*/

use crate::namespace;

namespace! {
    "rdf",
    "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
    {
        html, "HTML",
        lang_string, "langString",
        plain_literal, "PlainLiteral",
        a_type, "type",
        property, "Property",
        statement, "Statement",
        subject, "subject",
        predicate, "predicate",
        object, "object",
        bag, "Bag",
        seq, "Seq",
        alt, "Alt",
        value, "value",
        list, "List",
        nil, "nil",
        first, "first",
        rest, "rest",
        li, "li",
        xml_literal, "XMLLiteral",
        json, "JSON",
        compound_literal, "CompoundLiteral",
        language, "language",
        direction, "direction",
    }
}

/// Returns the qualified IRI for the `n`th member of an `rdf:Bag`/`rdf:Seq`/`rdf:Alt` container,
/// i.e. `rdf:_n`.
pub fn member(index: u32) -> rdf_iri::Iri {
    use rdf_iri::IriExtra;
    use std::str::FromStr;
    namespace()
        .make_name(rdf_iri::Name::from_str(&format!("_{}", index)).expect("valid container index"))
        .expect("namespace accepts container member names")
}

/// Returns the `rdf:_n` qualified-name string for the `n`th member of a container.
pub fn member_qname(index: u32) -> String {
    format!("rdf:_{}", index)
}
