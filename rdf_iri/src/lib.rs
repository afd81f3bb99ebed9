/*!
This crate provides the `Iri` type and `IriExtra` namespace ergonomics used throughout the
`rdf_*` crates, plus the `Name` type used for namespaced-name (NCName-shaped) identifiers.

# Example

```rust
use rdf_iri::{Iri, IriExtra as _, Name};
use std::str::FromStr;

let namespace = Iri::from_str("https://example.org/ns/things#").unwrap();
assert!(namespace.looks_like_namespace());

let name = namespace.make_name(Name::from_str("ThisThing").unwrap()).unwrap();
assert_eq!(name.to_string(), "https://example.org/ns/things#ThisThing".to_string());
```
*/

#![warn(
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    missing_debug_implementations,
    unreachable_pub,
    unsafe_code
)]

use std::fmt::Display;
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// The common type for absolute IRI values used throughout the `rdf_*` crates. An `Iri` is, by
/// construction, always an absolute form (it has a scheme); there is no separate "relative IRI"
/// type in this model.
pub type Iri = url::Url;

/// The reference-counted type wrapping an `Iri`, used wherever an IRI is shared across values
/// without needing to clone the underlying string.
pub type IriRef = std::sync::Arc<Iri>;

/// Errors reported while parsing a string into an `Iri`.
pub type Error = url::ParseError;

///
/// Additional, mainly namespace-oriented, methods for the [`Iri`] type. All of these treat an
/// `Iri` ending in `/` or with an empty fragment as a *namespace*, and provide the split/compose
/// operations the prefix map and coercion layer need.
///
pub trait IriExtra {
    /// Returns a copy of the current IRI with the path component replaced by `path`.
    fn with_new_path<S>(&self, path: S) -> Self
    where
        S: AsRef<str>;

    /// Returns a copy of the current IRI with the fragment component replaced by `fragment`.
    fn with_new_fragment<S>(&self, fragment: S) -> Self
    where
        S: AsRef<str>;

    /// Returns a copy of the current IRI with the fragment component set to the empty string.
    fn with_empty_fragment(&self) -> Self;

    /// Returns a copy of the current IRI with the fragment component removed entirely.
    fn with_no_fragment(&self) -> Self;

    ///
    /// Returns `true` if this IRI may be used as a valid namespace: it has an empty (but present)
    /// fragment, or a path ending in `/` with no query part.
    ///
    fn looks_like_namespace(&self) -> bool;

    /// If this IRI is a namespaced-name, return the `(namespace, name)` pair, else `None`.
    fn split(&self) -> Option<(Self, Name)>
    where
        Self: Sized;

    /// If this IRI is a namespaced-name, return the namespace part, else `None`.
    fn namespace(&self) -> Option<Self>
    where
        Self: Sized,
    {
        self.split().map(|(u, _)| u)
    }

    /// If this IRI is a namespaced-name, return the name part, else `None`.
    fn name(&self) -> Option<Name>
    where
        Self: Sized,
    {
        self.split().map(|(_, n)| n)
    }

    /// Assuming `self` is a namespace, append `name` and return the resulting IRI.
    fn make_name(&self, name: Name) -> Option<Self>
    where
        Self: Sized;
}

///
/// This type represents the local-name component of an IRI used as a namespaced identifier, and
/// of a prefixed (QName-style) name. Validated against the XML `Name` production.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

/// Denotes an error generated by [`Name::from_str`] / [`Name::parse_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameParseError {
    /// The string contained a character not valid in an XML `Name`.
    InvalidCharacter,
    /// The string was empty.
    Empty,
}

// ------------------------------------------------------------------------------------------------
// Implementations ❱ IriExtra
// ------------------------------------------------------------------------------------------------

impl IriExtra for Iri {
    fn with_new_path<S>(&self, path: S) -> Self
    where
        S: AsRef<str>,
    {
        let mut new_self = self.clone();
        new_self.set_path(path.as_ref());
        new_self
    }

    fn with_new_fragment<S>(&self, fragment: S) -> Self
    where
        S: AsRef<str>,
    {
        let mut new_self = self.clone();
        new_self.set_fragment(Some(fragment.as_ref()));
        new_self
    }

    fn with_empty_fragment(&self) -> Self {
        self.with_new_fragment("")
    }

    fn with_no_fragment(&self) -> Self {
        let mut new_self = self.clone();
        new_self.set_fragment(None);
        new_self
    }

    fn looks_like_namespace(&self) -> bool {
        self.fragment() == Some("") || (self.path().ends_with('/') && self.query().is_none())
    }

    fn split(&self) -> Option<(Self, Name)>
    where
        Self: Sized,
    {
        if self.fragment().map(|s| !s.is_empty()).unwrap_or(false) {
            let name = Name::from_str(self.fragment().unwrap()).ok()?;
            Some((self.with_empty_fragment(), name))
        } else if !self.path().is_empty() && !self.path().ends_with('/') && self.query().is_none()
        {
            let last_segment = self.path_segments()?.last()?;
            let name = Name::from_str(last_segment).ok()?;
            let path = self.path();
            let path = &path[0..path.len() - name.as_ref().len()];
            Some((self.with_new_path(path), name))
        } else {
            None
        }
    }

    fn make_name(&self, name: Name) -> Option<Self>
    where
        Self: Sized,
    {
        if self.fragment() == Some("") {
            Some(self.with_new_fragment(name.as_ref()))
        } else if self.path().ends_with('/') && self.query().is_none() {
            Some(self.with_new_path(format!("{}{}", self.path(), name.as_ref())))
        } else {
            None
        }
    }
}

///
/// Return a fresh, globally-unique IRI under `base`'s scheme and authority, using the well-known
/// `.well-known/genid/` path. Used by `Graph::skolemize` to replace blank nodes with minted IRIs.
///
#[cfg(feature = "genid")]
pub fn genid(base: &Iri) -> Result<Iri, Error> {
    let new_uuid = uuid::Uuid::new_v4();
    let new_uuid = new_uuid
        .as_simple()
        .encode_lower(&mut uuid::Uuid::encode_buffer())
        .to_string();
    let path = format!("/.well-known/genid/{new_uuid}");
    base.join(&path)
}

// ------------------------------------------------------------------------------------------------
// Implementations ❱ Name
// ------------------------------------------------------------------------------------------------

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Name {
    type Err = NameParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl Name {
    /// Construct a `Name` from `s` without validation; used when the caller already knows `s` is
    /// well-formed (e.g. a vocabulary constant built at compile time).
    pub fn new_unchecked<S>(s: S) -> Name
    where
        S: AsRef<str>,
    {
        Self(s.as_ref().to_string())
    }

    /// Returns `true` if `s` is a valid XML `Name`.
    pub fn is_valid_str<S>(s: S) -> bool
    where
        S: AsRef<str>,
    {
        is_xml_name(s.as_ref())
    }

    /// Parse and validate `s` as a `Name`.
    pub fn parse_str<S>(s: S) -> Result<Self, NameParseError>
    where
        S: AsRef<str>,
    {
        let s = s.as_ref();
        if s.is_empty() {
            Err(NameParseError::Empty)
        } else if is_xml_name(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(NameParseError::InvalidCharacter)
        }
    }
}

impl Display for NameParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter => {
                write!(f, "the string contains a character not valid in an XML Name")
            }
            Self::Empty => write!(f, "a Name may not be the empty string"),
        }
    }
}

impl std::error::Error for NameParseError {}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn is_xml_name_start_char(c: char) -> bool {
    c == ':'
        || c.is_ascii_uppercase()
        || c == '_'
        || c.is_ascii_lowercase()
        || ('\u{C0}'..='\u{D6}').contains(&c)
        || ('\u{D8}'..='\u{F6}').contains(&c)
        || ('\u{0F8}'..='\u{2FF}').contains(&c)
        || ('\u{370}'..='\u{37D}').contains(&c)
        || ('\u{037F}'..='\u{1FFF}').contains(&c)
        || ('\u{200C}'..='\u{200D}').contains(&c)
        || ('\u{2070}'..='\u{218F}').contains(&c)
        || ('\u{2C00}'..='\u{2FEF}').contains(&c)
        || ('\u{3001}'..='\u{D7FF}').contains(&c)
        || ('\u{F900}'..='\u{FDCF}').contains(&c)
        || ('\u{FDF0}'..='\u{FFFD}').contains(&c)
        || ('\u{10000}'..='\u{EFFFF}').contains(&c)
}

fn is_xml_name_char(c: char) -> bool {
    is_xml_name_start_char(c)
        || c == '-'
        || c == '.'
        || c.is_ascii_digit()
        || c == '\u{B7}'
        || ('\u{0300}'..='\u{036F}').contains(&c)
        || ('\u{203F}'..='\u{2040}').contains(&c)
}

fn is_xml_name(s: &str) -> bool {
    !s.is_empty() && s.starts_with(is_xml_name_start_char) && s[1..].chars().all(is_xml_name_char)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_absolute_iris() {
        assert!(Iri::from_str("https://example.org/ns#Thing").is_ok());
        assert!(Iri::from_str("urn:isbn:0451450523").is_ok());
        assert!(Iri::from_str("not an iri").is_err());
    }

    #[test]
    fn splits_hash_namespaced_names() {
        let ns_name = Iri::from_str("https://example.org/ns#Name").unwrap();
        let (ns, name) = ns_name.split().unwrap();
        assert_eq!(ns, Iri::from_str("https://example.org/ns#").unwrap());
        assert_eq!(name, Name::from_str("Name").unwrap());
    }

    #[test]
    fn splits_slash_namespaced_names() {
        let ns_name = Iri::from_str("https://example.org/ns/Name").unwrap();
        let (ns, name) = ns_name.split().unwrap();
        assert_eq!(ns, Iri::from_str("https://example.org/ns/").unwrap());
        assert_eq!(name, Name::from_str("Name").unwrap());
    }

    #[test]
    fn no_split_for_bare_namespace() {
        let ns = Iri::from_str("https://example.org").unwrap();
        assert_eq!(ns.split(), None);
    }

    #[test]
    fn make_name_round_trips_split() {
        let ns = Iri::from_str("https://example.org/ns/").unwrap();
        let name = Name::from_str("Widget").unwrap();
        let full = ns.make_name(name.clone()).unwrap();
        assert_eq!(full, Iri::from_str("https://example.org/ns/Widget").unwrap());
        assert_eq!(full.split(), Some((ns, name)));
    }

    #[test]
    fn name_rejects_invalid_characters() {
        assert!(Name::from_str("").is_err());
        assert!(Name::from_str("has space").is_err());
        assert!(Name::from_str("_valid-Name.42").is_ok());
    }

    #[cfg(feature = "genid")]
    #[test]
    fn genid_uses_well_known_path() {
        let base = Iri::from_str("https://example.org/path#fragment").unwrap();
        let id = genid(&base).unwrap();
        assert!(id.as_str().starts_with("https://example.org/.well-known/genid/"));
    }
}
