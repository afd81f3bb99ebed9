/*!
Commonly used terms from the RDF Schema namespace, `http://www.w3.org/2000/01/rdf-schema#`.
*/

use crate::namespace;

namespace! {
    "rdfs",
    "http://www.w3.org/2000/01/rdf-schema#",
    {
        resource, "Resource",
        class, "Class",
        literal, "Literal",
        data_type, "Datatype",
        lang_string, "langString",
        html_literal, "HTML",
        xml_literal, "XMLLiteral",
        property, "Property",
        range, "range",
        domain, "domain",
        subclass_of, "subClassOf",
        subproperty_of, "subPropertyOf",
        label, "label",
        comment, "comment",
        container, "Container",
        container_membership_property, "ContainerMembershipProperty",
        member, "member",
        see_also, "seeAlso",
        is_defined_by, "isDefinedBy",
        value, "value",
    }
}
