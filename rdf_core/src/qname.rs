/*!
A qualified name, `QName`: a prefix label plus a local name, as used in Turtle's `prefix:name`
syntax and by [`crate::prefix::PrefixMap`] to expand/compress against an `Iri`.
*/

use crate::error::Error;
use rdf_iri::Name;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct QName {
    prefix: Option<Name>,
    name: Name,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for QName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(f, "{prefix}:")?;
        }
        write!(f, "{}", self.name)
    }
}

impl FromStr for QName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None => Self::new_unqualified(Name::from_str(s)?),
            Some((prefix, name)) => Self::new(Name::from_str(prefix)?, Name::from_str(name)?),
        }
    }
}

impl QName {
    /// Construct a qualified name with the given `prefix` and `name`.
    pub fn new(prefix: Name, name: Name) -> Result<Self, Error> {
        Ok(Self {
            prefix: Some(prefix),
            name,
        })
    }

    /// Construct an unprefixed name, resolved against a graph's default namespace.
    pub fn new_unqualified(name: Name) -> Result<Self, Error> {
        Ok(Self { prefix: None, name })
    }

    /// This qualified name's prefix label, if any.
    pub fn prefix(&self) -> Option<&Name> {
        self.prefix.as_ref()
    }

    /// This qualified name's local name part.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// `true` if this name has no prefix (it resolves against the default namespace).
    pub fn is_blank(&self) -> bool {
        self.prefix.is_none()
    }

    /// Render as a CURIE, `[prefix:name]`.
    pub fn as_curie(&self) -> String {
        format!(
            "[{}:{}]",
            self.prefix.as_ref().map(|p| p.to_string()).unwrap_or_default(),
            self.name
        )
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_with_and_without_prefix() {
        let qname = QName::new_unqualified(Name::from_str("foo").unwrap()).unwrap();
        assert_eq!(qname.to_string(), "foo");

        let qname = QName::new(Name::from_str("rdf").unwrap(), Name::from_str("foo").unwrap()).unwrap();
        assert_eq!(qname.to_string(), "rdf:foo");
        assert_eq!(qname.as_curie(), "[rdf:foo]");
    }

    #[test]
    fn parses_from_str() {
        assert_eq!(QName::from_str("foo").unwrap().to_string(), "foo");
        assert_eq!(QName::from_str("rdf:foo").unwrap().to_string(), "rdf:foo");
        assert!(QName::from_str("rdf foo").is_err());
        assert!(QName::from_str("").is_err());
    }
}
