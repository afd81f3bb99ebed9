/*!
The original eleven Dublin Core elements, `http://purl.org/dc/elements/1.1/`.
*/

use crate::namespace;

namespace! {
    "dc",
    "http://purl.org/dc/elements/1.1/",
    {
        title, "title",
        creator, "creator",
        subject, "subject",
        description, "description",
        publisher, "publisher",
        contributor, "contributor",
        date, "date",
        a_type, "type",
        format, "format",
        identifier, "identifier",
        source, "source",
        language, "language",
        relation, "relation",
        coverage, "coverage",
        rights, "rights",
    }
}
