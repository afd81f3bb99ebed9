/*!
Commonly used datatype IRIs from the XML Schema namespace,
`http://www.w3.org/2001/XMLSchema#`. This module is not present in every RDF toolkit's
vocabulary crate as a hand-maintained list, but the datatype registry (§6) needs concrete
constants for the built-in datatypes it ships, so they are enumerated here in the same style as
the other namespace modules.
*/

use crate::namespace;

namespace! {
    "xsd",
    "http://www.w3.org/2001/XMLSchema#",
    {
        string, "string",
        boolean, "boolean",
        decimal, "decimal",
        integer, "integer",
        double, "double",
        float, "float",
        date_time, "dateTime",
        date, "date",
        time, "time",
        duration, "duration",
        any_uri, "anyURI",
        qname, "QName",
        long, "long",
        int, "int",
        short, "short",
        byte, "byte",
        unsigned_long, "unsignedLong",
        unsigned_int, "unsignedInt",
        unsigned_short, "unsignedShort",
        unsigned_byte, "unsignedByte",
        non_negative_integer, "nonNegativeInteger",
        positive_integer, "positiveInteger",
        non_positive_integer, "nonPositiveInteger",
        negative_integer, "negativeInteger",
        base64_binary, "base64Binary",
        hex_binary, "hexBinary",
        g_year, "gYear",
        g_year_month, "gYearMonth",
        g_month, "gMonth",
        g_month_day, "gMonthDay",
        g_day, "gDay",
        normalized_string, "normalizedString",
        token, "token",
        language, "language",
        name, "Name",
        ncname, "NCName",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_core_builtin_datatypes() {
        assert_eq!(string().to_string(), "http://www.w3.org/2001/XMLSchema#string");
        assert_eq!(integer_qname(), "xsd:integer");
        assert_eq!(boolean_str(), "boolean");
    }
}
