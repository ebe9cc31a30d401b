//! Canonical vertex partitions derived from an edge subset.
//!
//! Components are numbered in order of their smallest vertex, so the
//! component holding vertex 0 is always first and the numbering never depends
//! on which root the union-find happened to elect.

use std::fmt;

use crate::{edge::Edge, error::Result, union_find::DisjointSet};

/// A partition of `0..vertex_count` into connected components.
///
/// # Examples
/// ```
/// use mst_repair_core::Graph;
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(3, 1, 1)?;
/// graph.add_edge(0, 2, 1)?;
/// let components = graph.components_of(graph.edges())?;
/// assert_eq!(components.len(), 2);
/// assert_eq!(components.get(0), Some(&[0, 2][..]));
/// assert_eq!(components.get(1), Some(&[1, 3][..]));
/// assert_eq!(components.component_of(3), Some(1));
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Components {
    labels: Vec<usize>,
    members: Vec<Vec<usize>>,
}

impl Components {
    /// Groups `0..vertex_count` by connectivity over `edges`.
    pub(crate) fn from_edges<'a>(
        vertex_count: usize,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Result<Self> {
        let mut sets = DisjointSet::new(vertex_count);
        for edge in edges {
            sets.union(edge.src(), edge.dest())?;
        }

        let mut label_by_root: Vec<Option<usize>> = vec![None; vertex_count];
        let mut labels = Vec::with_capacity(vertex_count);
        let mut members: Vec<Vec<usize>> = Vec::with_capacity(sets.component_count());
        for vertex in 0..vertex_count {
            let root = sets.find(vertex)?;
            let slot = label_by_root.get_mut(root);
            let label = match slot {
                Some(Some(label)) => *label,
                Some(slot) => {
                    let label = members.len();
                    *slot = Some(label);
                    members.push(Vec::new());
                    label
                }
                None => continue,
            };
            labels.push(label);
            if let Some(component) = members.get_mut(label) {
                component.push(vertex);
            }
        }

        Ok(Self { labels, members })
    }

    /// Returns the number of components.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.members.len() }

    /// Returns `true` when the partition covers no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.members.is_empty() }

    /// Returns the number of vertices covered by the partition.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.labels.len() }

    /// Returns the ascending vertex list of component `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&[usize]> {
        self.members.get(index).map(Vec::as_slice)
    }

    /// Returns the component index holding `vertex`.
    #[must_use]
    pub fn component_of(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Returns `true` when `vertex` belongs to component `index`.
    #[must_use]
    pub fn contains(&self, index: usize, vertex: usize) -> bool {
        self.component_of(vertex) == Some(index)
    }

    /// Iterates over the components in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> {
        self.members.iter().map(Vec::as_slice)
    }
}

impl fmt::Display for Components {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, component) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" | ")?;
            }
            f.write_str("{")?;
            for (position, vertex) in component.iter().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{vertex}")?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}
