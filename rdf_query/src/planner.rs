/*!
A greedy selectivity planner (§4.4 "Execution contract": "materializing and streaming strategies
must agree on the solution multiset; the join order between them may differ"). Patterns are
reordered, never dropped or rewritten, so both matchers see the same pattern set, just in an order
chosen to bind variables as early as possible.
*/

use crate::pattern::TriplePattern;
use std::collections::HashSet;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Reorders `patterns` so that, at each step, the next pattern chosen is the one with the fewest
/// still-unbound variables, breaking ties in favor of the pattern with more concrete positions.
/// A fully concrete pattern (no variables at all) is always scheduled first when one is present.
pub fn plan(patterns: Vec<TriplePattern>) -> Vec<TriplePattern> {
    let mut remaining = patterns;
    let mut bound: HashSet<String> = HashSet::new();
    let mut ordered = Vec::with_capacity(remaining.len());

    while !remaining.is_empty() {
        let best_index = remaining
            .iter()
            .enumerate()
            .min_by_key(|(_, pattern)| selectivity_score(pattern, &bound))
            .map(|(index, _)| index)
            .expect("remaining is non-empty");
        let chosen = remaining.remove(best_index);
        for variable in chosen.variables() {
            let _ = bound.insert(variable.to_string());
        }
        ordered.push(chosen);
    }
    ordered
}

/// Lower is more selective: fewer unbound variables first, then fewer concrete positions broken
/// (i.e. more concrete positions) as a tiebreak.
fn selectivity_score(pattern: &TriplePattern, bound: &HashSet<String>) -> (usize, usize) {
    let unbound_variables = pattern.variables().into_iter().filter(|v| !bound.contains(*v)).count();
    let concrete_positions = [&pattern.subject, &pattern.predicate, &pattern.object]
        .into_iter()
        .filter(|term| term.as_concrete().is_some())
        .count();
    (unbound_variables, 3 - concrete_positions)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
