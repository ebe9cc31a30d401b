//! Weighted undirected edges with a stable identity.

use std::fmt;

/// Identifier assigned to an edge when it is added to a [`crate::Graph`].
///
/// The id equals the edge's insertion position, so two parallel edges with
/// identical endpoints and weight remain distinguishable.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the insertion position backing this id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn get(self) -> usize { self.0 }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A weighted undirected edge owned by a [`crate::Graph`].
///
/// Equality and hashing include the [`EdgeId`], so comparing two edges asks
/// "is this the same edge", not "do these edges look alike". Use
/// [`Edge::same_value`] for the structural comparison.
///
/// # Examples
/// ```
/// use mst_repair_core::Graph;
///
/// let mut graph = Graph::new(2);
/// let first = graph.add_edge(0, 1, 4)?;
/// let second = graph.add_edge(0, 1, 4)?;
/// let edges = graph.edges();
/// assert_ne!(edges[first.get()], edges[second.get()]);
/// assert!(edges[first.get()].same_value(&edges[second.get()]));
/// assert_eq!(edges[first.get()].to_string(), "0 - 1 (weight: 4)");
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    id: EdgeId,
    src: usize,
    dest: usize,
    weight: i64,
}

impl Edge {
    pub(crate) const fn new(id: EdgeId, src: usize, dest: usize, weight: i64) -> Self {
        Self {
            id,
            src,
            dest,
            weight,
        }
    }

    /// Returns the identity assigned at insertion.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> EdgeId { self.id }

    /// Returns the first endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn src(&self) -> usize { self.src }

    /// Returns the second endpoint as supplied by the caller.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dest(&self) -> usize { self.dest }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns `(src, dest, weight)`, dropping the identity.
    #[must_use]
    pub const fn as_tuple(&self) -> (usize, usize, i64) {
        (self.src, self.dest, self.weight)
    }

    /// Returns `true` when both edges carry the same `(src, dest, weight)`,
    /// regardless of identity.
    ///
    /// Orientation matters: `(a, b, w)` and `(b, a, w)` are not the same value.
    #[must_use]
    pub const fn same_value(&self, other: &Self) -> bool {
        self.src == other.src && self.dest == other.dest && self.weight == other.weight
    }

    /// Returns `true` when the edge starts and ends on the same vertex.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} (weight: {})", self.src, self.dest, self.weight)
    }
}
