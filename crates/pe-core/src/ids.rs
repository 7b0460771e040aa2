//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.
//!
//! `NodeId` is special: graph nodes are **labelled** `1..=N`, and the label is
//! meaningful (the greedy strategies measure distance as the absolute label
//! difference).  Per-node arrays are indexed by the zero-based
//! [`NodeId::index`] slot, never by the raw label.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifies one pursuit participant (a strategy slot or the evader) for
    /// RNG stream derivation.
    pub struct AgentId(u32);
}

typed_id! {
    /// Zero-based trial counter within one strategy's run.
    pub struct TrialId(u32);
}

impl AgentId {
    /// Reserved id for the evader's RNG stream.  Strategy slots count up
    /// from zero, so they never collide with it.
    pub const EVADER: AgentId = AgentId(u32::MAX);
}

// ── NodeId ────────────────────────────────────────────────────────────────────

/// A graph node label in `1..=N`.
///
/// Label `0` is never produced by the topology builder; it exists only as the
/// `Default` value so uninitialised ids are visibly invalid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The lowest valid label.
    pub const FIRST: NodeId = NodeId(1);

    /// Zero-based slot for indexing per-node arrays (`label - 1`).
    ///
    /// # Panics
    /// Panics in debug mode on the invalid label `0`.
    #[inline(always)]
    pub fn index(self) -> usize {
        debug_assert!(self.0 > 0, "NodeId(0) is not a valid node label");
        self.0 as usize - 1
    }

    /// Inverse of [`index`](Self::index).
    #[inline(always)]
    pub fn from_index(index: usize) -> NodeId {
        NodeId(index as u32 + 1)
    }

    /// `true` if this label lies in `1..=node_count`.
    #[inline]
    pub fn is_within(self, node_count: usize) -> bool {
        self.0 >= 1 && self.0 as usize <= node_count
    }

    /// Absolute difference between two labels: the "numeric distance"
    /// used by the label-greedy strategies.  Not a graph distance.
    #[inline]
    pub fn label_distance(self, other: NodeId) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// Iterate every label of a graph with `node_count` nodes, in order.
    pub fn all(node_count: usize) -> impl Iterator<Item = NodeId> {
        (0..node_count).map(NodeId::from_index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}
