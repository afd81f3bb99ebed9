/*!
A minimal set of terms from the OWL namespace, `http://www.w3.org/2002/07/owl#`, sufficient for
the Turtle writer's "top classes" subject ordering rule and for coercing a handful of common
vocabulary tokens. This crate does not aim to be a complete OWL vocabulary.
*/

use crate::namespace;

namespace! {
    "owl",
    "http://www.w3.org/2002/07/owl#",
    {
        class, "Class",
        thing, "Thing",
        nothing, "Nothing",
        object_property, "ObjectProperty",
        datatype_property, "DatatypeProperty",
        annotation_property, "AnnotationProperty",
        same_as, "sameAs",
        different_from, "differentFrom",
        equivalent_class, "equivalentClass",
        equivalent_property, "equivalentProperty",
    }
}
