/*!
A small stateful column-indent tracker used by the Turtle writer's nested blank-node-property-list
and predicate-object-list rendering.
*/

use std::cmp::max;
use std::fmt::{Display, Formatter};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

#[derive(Copy, Clone, Debug)]
pub(crate) struct Indenter {
    width: u16,
    depth: u8,
}

impl Default for Indenter {
    fn default() -> Self {
        Self::with_width(4)
    }
}

impl Display for Indenter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:width$}", "", width = (self.width * self.depth as u16) as usize)
    }
}

impl Indenter {
    pub(crate) fn with_width(width: u16) -> Self {
        Self { width, depth: 0 }
    }

    pub(crate) fn depth(&self) -> u8 {
        self.depth
    }

    pub(crate) fn indent(&self) -> Self {
        Self { width: self.width, depth: self.depth + 1 }
    }

    pub(crate) fn outdent(&self) -> Self {
        Self { width: self.width, depth: max(0, self.depth.saturating_sub(1)) }
    }
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_and_outdent_track_depth() {
        let indenter = Indenter::with_width(2).indent().indent();
        assert_eq!(indenter.depth(), 2);
        assert_eq!(indenter.to_string(), "    ");
        assert_eq!(indenter.outdent().depth(), 1);
    }

    #[test]
    fn outdent_at_zero_depth_stays_at_zero() {
        assert_eq!(Indenter::default().outdent().depth(), 0);
    }
}
