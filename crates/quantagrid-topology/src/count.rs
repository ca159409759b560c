//! Validated node count.
//!
//! A layout needs at least one node (the angle step divides by the count)
//! and the visualisation caps the mesh at twelve. [`NodeCount`] can only hold
//! values in `[MIN, MAX]`, so degenerate counts never reach the trigonometry.

use crate::{Error, Result};

/// Number of nodes in a mesh layout, always within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "usize", into = "usize"))]
pub struct NodeCount(usize);

impl NodeCount {
    /// Smallest supported mesh.
    pub const MIN: Self = Self(1);

    /// Largest supported mesh.
    pub const MAX: Self = Self(12);

    /// Initial mesh size of the visualisation.
    pub const DEFAULT: Self = Self(6);

    /// Create a node count, rejecting values outside `[MIN, MAX]`.
    pub fn new(count: usize) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&count) {
            Ok(Self(count))
        } else {
            Err(Error::NodeCountOutOfRange {
                requested: count,
                min: Self::MIN.0,
                max: Self::MAX.0,
            })
        }
    }

    /// Create a node count, saturating into `[MIN, MAX]`.
    ///
    /// Mirrors a bounded slider: anything below the range becomes `MIN`,
    /// anything above becomes `MAX`.
    pub fn clamped(count: i64) -> Self {
        let lo = Self::MIN.0 as i64;
        let hi = Self::MAX.0 as i64;
        Self(count.clamp(lo, hi) as usize)
    }

    /// The raw count.
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of edges in the complete graph over this many nodes.
    pub const fn edge_count(self) -> usize {
        self.0 * (self.0 - 1) / 2
    }
}

impl Default for NodeCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for NodeCount {
    type Error = Error;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

impl From<NodeCount> for usize {
    fn from(count: NodeCount) -> usize {
        count.0
    }
}

impl std::fmt::Display for NodeCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_full_range() {
        for n in 1..=12 {
            assert_eq!(NodeCount::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn rejects_zero_and_thirteen() {
        assert_eq!(
            NodeCount::new(0),
            Err(Error::NodeCountOutOfRange { requested: 0, min: 1, max: 12 })
        );
        assert!(NodeCount::new(13).is_err());
    }

    #[test]
    fn clamped_saturates() {
        assert_eq!(NodeCount::clamped(-5), NodeCount::MIN);
        assert_eq!(NodeCount::clamped(0), NodeCount::MIN);
        assert_eq!(NodeCount::clamped(7).get(), 7);
        assert_eq!(NodeCount::clamped(100), NodeCount::MAX);
        assert_eq!(NodeCount::clamped(i64::MAX), NodeCount::MAX);
    }

    #[test]
    fn edge_counts() {
        assert_eq!(NodeCount::MIN.edge_count(), 0);
        assert_eq!(NodeCount::DEFAULT.edge_count(), 15);
        assert_eq!(NodeCount::MAX.edge_count(), 66);
    }

    #[test]
    fn default_is_six() {
        assert_eq!(NodeCount::default().get(), 6);
    }
}
