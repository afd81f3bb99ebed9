/*!
`Solution`, one row of variable bindings produced by matching a basic graph pattern against a
graph (§4.4 "Solution"): a partial function from variable name to bound [`Term`].
*/

use rdf_core::term::Term;
use std::collections::BTreeMap;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A binding of variable names to terms. Ordered by variable name so that two solutions with the
/// same bindings compare and print identically regardless of the order they were built in.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    bindings: BTreeMap<String, Term>,
}

impl Solution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a copy of this solution with `name` bound to `term`. Callers are expected to have
    /// already checked consistency with any existing binding; see [`crate::engine`].
    pub fn extended(&self, name: &str, term: Term) -> Self {
        let mut bindings = self.bindings.clone();
        let _ = bindings.insert(name.to_string(), term);
        Self { bindings }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rdf_core::term::Literal;

    #[test]
    fn extended_does_not_mutate_the_original() {
        let base = Solution::empty();
        let extended = base.extended("x", Term::Literal(Literal::new("1")));
        assert!(base.is_empty());
        assert_eq!(extended.get("x"), Some(&Term::Literal(Literal::new("1"))));
    }

    #[test]
    fn equality_ignores_binding_insertion_order() {
        let a = Solution::empty()
            .extended("x", Term::Literal(Literal::new("1")))
            .extended("y", Term::Literal(Literal::new("2")));
        let b = Solution::empty()
            .extended("y", Term::Literal(Literal::new("2")))
            .extended("x", Term::Literal(Literal::new("1")));
        assert_eq!(a, b);
    }
}
