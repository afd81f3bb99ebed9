/*!
A subset of the Dublin Core Metadata Terms namespace, `http://purl.org/dc/terms/`.
*/

use crate::namespace;

namespace! {
    "dcterms",
    "http://purl.org/dc/terms/",
    {
        title, "title",
        creator, "creator",
        created, "created",
        modified, "modified",
        description, "description",
        license, "license",
        identifier, "identifier",
        is_part_of, "isPartOf",
        has_part, "hasPart",
        conforms_to, "conformsTo",
    }
}
