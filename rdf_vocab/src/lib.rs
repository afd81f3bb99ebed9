/*!
This crate provides modules containing the `Iri`s and qualified-name strings for vocabularies
commonly needed by an RDF data model: RDF, RDF Schema, XML Schema datatypes, OWL, and Dublin
Core. It also provides macro support for defining additional namespaces in the same style, and
a small `Vocabulary` trait used by the coercion layer (§6, "Vocabulary namespace") to resolve an
opaque token — a bare local name — against a chosen namespace.

# Macro Example

```rust
use rdf_vocab::namespace;

namespace! {
    "geo",
    "http://www.w3.org/2003/01/geo/wgs84_pos#",
    {
        lat, "lat",
        long, "long"
    }
}
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    missing_debug_implementations,
    unreachable_pub
)]

use rdf_iri::Iri;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A vocabulary namespace: a base IRI plus the ability to resolve a bare token (an identifier with
/// no scheme, such as `"type"` or a CURIE-style `"rdf:type"`) into a fully qualified `Iri`. This is
/// the external collaborator described in §6; the coercion layer is the only consumer.
///
pub trait Vocabulary {
    /// The namespace IRI this vocabulary resolves tokens against.
    fn base_iri(&self) -> &Iri;

    /// Resolve `token` to a fully qualified `Iri` within this vocabulary, or `None` if `token`
    /// does not name a known member.
    fn resolve_term(&self, token: &str) -> Option<Iri>;
}

// ------------------------------------------------------------------------------------------------
// Macros
// ------------------------------------------------------------------------------------------------

///
/// Produces the constants and functions that describe a vocabulary module: `default_prefix()`,
/// `namespace()`, `namespace_str()`, and for each member a trio of functions returning the
/// qualified `Iri`, the bare member name, and a `prefix:name` qualified-name string.
///
#[macro_export]
macro_rules! namespace {
    ($prefix:expr, $namespace:expr, { $($fn_name:ident, $name:expr),* $(,)? }) => {
        #[doc(hidden)]
        const NAMESPACE: &str = $namespace;

        #[doc(hidden)]
        const PREFIX: &str = $prefix;

        ::lazy_static::lazy_static! {
            #[doc(hidden)]
            static ref NS_IRI: ::rdf_iri::Iri =
                <::rdf_iri::Iri as ::std::str::FromStr>::from_str(NAMESPACE).unwrap();

            #[doc(hidden)]
            static ref NS_PREFIX: ::rdf_iri::Name =
                <::rdf_iri::Name as ::std::str::FromStr>::from_str(PREFIX).unwrap();

            #[doc(hidden)]
            static ref NS_CACHE: ::std::collections::HashMap<&'static str, (::rdf_iri::Iri, String)> =
                make_cache();
        }

        #[doc(hidden)]
        fn make_cache() -> ::std::collections::HashMap<&'static str, (::rdf_iri::Iri, String)> {
            let mut cache = ::std::collections::HashMap::new();
            $(
                let _ = cache.insert(
                    $name,
                    (
                        <::rdf_iri::Iri as ::rdf_iri::IriExtra>::make_name(
                            &NS_IRI,
                            <::rdf_iri::Name as ::std::str::FromStr>::from_str($name).unwrap(),
                        ).unwrap(),
                        format!("{}:{}", PREFIX, $name),
                    ),
                );
            )*
            cache
        }

        #[inline(always)]
        #[doc = "Returns the commonly used prefix label for this namespace."]
        pub fn default_prefix() -> &'static ::rdf_iri::Name {
            &NS_PREFIX
        }

        #[inline(always)]
        #[doc = "Returns the IRI identifying this namespace."]
        pub fn namespace() -> &'static ::rdf_iri::Iri {
            &NS_IRI
        }

        #[inline(always)]
        #[doc = "Returns the IRI, as a string, identifying this namespace."]
        pub fn namespace_str() -> &'static str {
            NAMESPACE
        }

        $(
            $crate::nsname!($fn_name, $name);
        )*
    };
}

///
/// Called only by [`namespace!`]; generates the `$fn_name()`, `${fn_name}_str()`, and
/// `${fn_name}_qname()` trio for one member of a vocabulary.
///
#[macro_export]
macro_rules! nsname {
    ($fn_name:ident, $name:expr) => {
        ::paste::paste! {
            #[inline(always)]
            #[doc = "Returns the qualified IRI for the namespace member `" $name "`."]
            pub fn $fn_name() -> &'static ::rdf_iri::Iri {
                &NS_CACHE.get($name).unwrap().0
            }

            #[inline(always)]
            #[doc = "Returns this member's bare name, `\"" $name "\"`."]
            pub fn [<$fn_name _str>]() -> &'static str {
                $name
            }

            #[inline(always)]
            #[doc = "Returns the `prefix:name` qualified-name string for this member."]
            pub fn [<$fn_name _qname>]() -> &'static str {
                &NS_CACHE.get($name).unwrap().1
            }
        }
    };
}

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod dc;
pub mod owl;
pub mod rdf;
pub mod rdfs;
pub mod xsd;

// ------------------------------------------------------------------------------------------------
// Implementations ❱ Vocabulary
// ------------------------------------------------------------------------------------------------

///
/// A `Vocabulary` backed by a single, fixed namespace IRI; tokens are resolved by simple
/// concatenation using `IriExtra::make_name`, without consulting a member list. This is the
/// general-purpose resolver the coercion layer falls back to when a caller supplies a bare
/// namespace rather than one of the generated modules above.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleVocabulary {
    base: Iri,
}

impl SimpleVocabulary {
    /// Construct a vocabulary rooted at `base`. `base` should satisfy
    /// `IriExtra::looks_like_namespace`, though this is not enforced here.
    pub fn new(base: Iri) -> Self {
        Self { base }
    }
}

impl Vocabulary for SimpleVocabulary {
    fn base_iri(&self) -> &Iri {
        &self.base
    }

    fn resolve_term(&self, token: &str) -> Option<Iri> {
        use rdf_iri::IriExtra;
        use std::str::FromStr;
        let name = rdf_iri::Name::from_str(token).ok()?;
        self.base.make_name(name)
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
