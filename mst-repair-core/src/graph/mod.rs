//! Weighted undirected graphs and the MST queries they answer.
//!
//! [`Graph::build_mst`] runs Kruskal's algorithm over a stably sorted copy of
//! the edge list. Once a tree edge has been removed,
//! [`Graph::find_components`] recovers the two halves of the tree and
//! [`Graph::find_replacement_edge`] scans the full edge list for the cheapest
//! non-tree edge joining them.

use std::collections::HashSet;

use tracing::{debug, info, instrument, warn};

use crate::{
    components::Components,
    edge::{Edge, EdgeId},
    error::{MstError, Result},
    union_find::DisjointSet,
};

/// A weighted undirected graph over vertices `0..vertex_count`.
///
/// The vertex count is fixed at construction and edges are never mutated
/// once added. Insertion order is preserved and decides ties between edges
/// of equal weight.
///
/// # Examples
/// ```
/// use mst_repair_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 3)?;
/// let mst = graph.build_mst()?;
/// let weights: Vec<i64> = mst.iter().map(|edge| edge.weight()).collect();
/// assert_eq!(weights, vec![1, 2]);
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns every edge in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the edge carrying `id`.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.get())
    }

    /// Appends an undirected edge and returns its identity.
    ///
    /// Self-loops and negative weights are accepted as given. Parallel edges
    /// are kept and stay distinguishable through their [`EdgeId`].
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when either endpoint is not
    /// below [`Graph::vertex_count`]. The graph is left unchanged.
    pub fn add_edge(&mut self, src: usize, dest: usize, weight: i64) -> Result<EdgeId> {
        for vertex in [src, dest] {
            if vertex >= self.vertex_count {
                return Err(MstError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }

        let id = EdgeId::new(self.edges.len());
        self.edges.push(Edge::new(id, src, dest, weight));
        Ok(id)
    }

    /// Computes a minimum spanning tree with Kruskal's algorithm.
    ///
    /// Edges are stably sorted by weight, so equal weights keep their
    /// insertion order. The result lists edges in the order they were
    /// accepted. A connected graph yields exactly `vertex_count - 1` edges;
    /// a disconnected one yields a spanning forest.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] if an edge references a vertex
    /// outside the graph, which [`Graph::add_edge`] already prevents.
    #[instrument(
        name = "graph.build_mst",
        err,
        skip(self),
        fields(vertices = self.vertex_count, edges = self.edges.len()),
    )]
    pub fn build_mst(&self) -> Result<Vec<Edge>> {
        let mut sorted = self.edges.clone();
        sorted.sort_by_key(Edge::weight);

        let target = self.vertex_count.saturating_sub(1);
        let mut sets = DisjointSet::new(self.vertex_count);
        let mut mst = Vec::with_capacity(target);
        for edge in sorted {
            if mst.len() == target {
                break;
            }
            if sets.union(edge.src(), edge.dest())? {
                debug!(edge = %edge, id = %edge.id(), "accepted edge");
                mst.push(edge);
            } else {
                debug!(edge = %edge, id = %edge.id(), "skipped cycle-forming edge");
            }
        }

        info!(
            mst_edges = mst.len(),
            total_weight = total_weight(&mst),
            spanning = mst.len() == target,
            "minimum spanning tree built"
        );
        Ok(mst)
    }

    /// Partitions the vertices by connectivity over `edges`.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] if an edge references a vertex
    /// outside the graph.
    pub fn components_of(&self, edges: &[Edge]) -> Result<Components> {
        Components::from_edges(self.vertex_count, edges)
    }

    /// Recomputes the components of `mst` once `removed` is taken out.
    ///
    /// Exactly one occurrence of `removed` is dropped, matched by identity.
    /// If `removed` is not part of `mst` the tree is used as-is; that is a
    /// caller error, reported through a `warn` event rather than a failure.
    /// Removing one edge from a spanning tree always leaves two components.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] if an edge references a vertex
    /// outside the graph.
    #[instrument(
        name = "graph.find_components",
        err,
        skip(self, mst, removed),
        fields(removed = %removed, mst_edges = mst.len()),
    )]
    pub fn find_components(&self, mst: &[Edge], removed: &Edge) -> Result<Components> {
        let mut remaining = mst.to_vec();
        match remaining.iter().position(|edge| edge == removed) {
            Some(position) => {
                remaining.remove(position);
            }
            None => warn!(
                removed = %removed,
                id = %removed.id(),
                "removed edge is not part of the tree; components use the tree unchanged"
            ),
        }

        let components = self.components_of(&remaining)?;
        debug!(components = components.len(), "components computed");
        Ok(components)
    }

    /// Finds the cheapest edge reconnecting the first two `components`.
    ///
    /// Every graph edge is scanned in insertion order, skipping `removed`
    /// and anything already in `mst`. An edge qualifies when one endpoint lies
    /// in component 0 and the other in component 1. The lightest qualifying
    /// edge wins; among equal weights the first one scanned wins. Returns
    /// `None` when fewer than two components are supplied or nothing crosses
    /// the split.
    ///
    /// # Errors
    /// Returns [`MstError::UnsupportedPartition`] when more than two
    /// components are supplied, since a single edge cannot reconnect them.
    #[instrument(
        name = "graph.find_replacement_edge",
        err,
        skip(self, mst, removed, components),
        fields(removed = %removed, components = components.len()),
    )]
    pub fn find_replacement_edge(
        &self,
        mst: &[Edge],
        removed: &Edge,
        components: &Components,
    ) -> Result<Option<Edge>> {
        match components.len() {
            0 | 1 => {
                debug!("partition is already connected; no replacement needed");
                return Ok(None);
            }
            2 => {}
            count => return Err(MstError::UnsupportedPartition { components: count }),
        }

        let in_tree: HashSet<EdgeId> = mst.iter().map(Edge::id).collect();
        let mut best: Option<&Edge> = None;
        for edge in &self.edges {
            if edge.id() == removed.id() || in_tree.contains(&edge.id()) {
                continue;
            }
            if !crosses(edge, components) {
                continue;
            }
            if best.is_none_or(|current| edge.weight() < current.weight()) {
                best = Some(edge);
            }
        }

        match best {
            Some(edge) => info!(replacement = %edge, id = %edge.id(), "replacement edge found"),
            None => info!("no edge reconnects the components"),
        }
        Ok(best.copied())
    }
}

/// Returns `true` when `edge` joins component 0 to component 1.
fn crosses(edge: &Edge, components: &Components) -> bool {
    matches!(
        (
            components.component_of(edge.src()),
            components.component_of(edge.dest()),
        ),
        (Some(0), Some(1)) | (Some(1), Some(0))
    )
}

/// Sums the weights of `edges`.
///
/// The sum is widened to `i128`, which holds the total of any edge list that
/// fits in memory, so extreme `i64` weights never overflow.
///
/// # Examples
/// ```
/// use mst_repair_core::{Graph, total_weight};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, i64::MAX)?;
/// graph.add_edge(1, 2, i64::MAX)?;
/// assert_eq!(total_weight(graph.edges()), 2 * i128::from(i64::MAX));
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[must_use]
pub fn total_weight(edges: &[Edge]) -> i128 {
    edges.iter().map(|edge| i128::from(edge.weight())).sum()
}
