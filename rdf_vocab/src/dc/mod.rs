/*!
The two Dublin Core namespaces in common use: the original eleven `dc:` elements, and the
larger `dcterms:` namespace. The Turtle writer's predicate-ordering rule only needs
`elements::title`, but both are provided for completeness.
*/

pub mod elements;
pub mod terms;
