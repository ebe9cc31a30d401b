//! MST maintenance: removing a tree edge and re-attaching a replacement.
//!
//! [`MstManager`] owns the current tree for one [`Graph`] and walks the
//! repair cycle `Built → EdgeRemoved → ComponentsComputed →
//! ReplacementAdded`. Cycles may be repeated; each removal re-derives its
//! components from the tree as it stands at that moment.

use tracing::{debug, info, instrument};

use crate::{
    components::Components,
    edge::Edge,
    error::{MstError, Result},
    graph::{Graph, total_weight},
};

/// Where an [`MstManager`] stands in the repair cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MaintenanceState {
    /// The tree is as [`Graph::build_mst`] produced it; no edge has been
    /// removed yet.
    Built,
    /// A tree edge has been removed.
    EdgeRemoved,
    /// The components left by the removal have been computed.
    ComponentsComputed,
    /// A replacement edge has been appended.
    ReplacementAdded,
}

/// Everything one repair cycle produced.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RepairOutcome {
    /// The tree edge that was removed.
    pub removed: Edge,
    /// The components left after the removal.
    pub components: Components,
    /// The edge appended to reconnect the tree, if one exists.
    pub replacement: Option<Edge>,
}

impl RepairOutcome {
    /// Returns `true` when a replacement reconnected the tree.
    #[must_use]
    pub const fn is_reconnected(&self) -> bool {
        self.replacement.is_some()
    }
}

/// Owns a graph and its current minimum spanning tree.
///
/// # Examples
/// ```
/// use mst_repair_core::{Graph, MstManager};
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.add_edge(0, 2, 5)?;
///
/// let mut manager = MstManager::new(graph)?;
/// assert_eq!(manager.total_weight(), 3);
///
/// let outcome = manager.repair(0)?;
/// assert_eq!(outcome.removed.as_tuple(), (0, 1, 1));
/// assert_eq!(outcome.replacement.map(|edge| edge.as_tuple()), Some((0, 2, 5)));
/// assert_eq!(manager.total_weight(), 7);
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MstManager {
    graph: Graph,
    mst: Vec<Edge>,
    state: MaintenanceState,
}

impl MstManager {
    /// Builds the minimum spanning tree of `graph` and takes ownership of
    /// both.
    ///
    /// # Errors
    /// Propagates failures from [`Graph::build_mst`].
    pub fn new(graph: Graph) -> Result<Self> {
        let mst = graph.build_mst()?;
        Ok(Self {
            graph,
            mst,
            state: MaintenanceState::Built,
        })
    }

    /// Returns the underlying graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &Graph { &self.graph }

    /// Returns the current tree edges in their maintained order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.mst }

    /// Returns the current position in the repair cycle.
    #[must_use]
    #[rustfmt::skip]
    pub const fn state(&self) -> MaintenanceState { self.state }

    /// Returns the summed weight of the current tree edges.
    #[must_use]
    pub fn total_weight(&self) -> i128 {
        total_weight(&self.mst)
    }

    /// Removes and returns the tree edge at `index`.
    ///
    /// # Errors
    /// Returns [`MstError::EdgeIndexOutOfRange`] when `index` is not below
    /// the current number of tree edges. The tree is left unchanged.
    pub fn remove_edge(&mut self, index: usize) -> Result<Edge> {
        if index >= self.mst.len() {
            return Err(MstError::EdgeIndexOutOfRange {
                index,
                len: self.mst.len(),
            });
        }

        let removed = self.mst.remove(index);
        self.state = MaintenanceState::EdgeRemoved;
        info!(removed = %removed, index, "removed tree edge");
        Ok(removed)
    }

    /// Computes the components of the current tree without `removed`.
    ///
    /// After [`MstManager::remove_edge`] the tree no longer holds `removed`,
    /// so the components come straight from the remaining edges. An edge
    /// that is still in the tree is taken out first.
    ///
    /// # Errors
    /// Propagates failures from [`Graph::find_components`] and
    /// [`Graph::components_of`].
    pub fn components_after_removal(&mut self, removed: &Edge) -> Result<Components> {
        let components = if self.mst.contains(removed) {
            self.graph.find_components(&self.mst, removed)?
        } else {
            self.graph.components_of(&self.mst)?
        };
        debug!(removed = %removed, components = components.len(), "components after removal");
        self.state = MaintenanceState::ComponentsComputed;
        Ok(components)
    }

    /// Finds the cheapest edge reconnecting `components` against the current
    /// tree.
    ///
    /// # Errors
    /// Propagates failures from [`Graph::find_replacement_edge`].
    pub fn find_replacement_edge(
        &self,
        removed: &Edge,
        components: &Components,
    ) -> Result<Option<Edge>> {
        self.graph
            .find_replacement_edge(&self.mst, removed, components)
    }

    /// Appends `replacement` to the tree; `None` leaves the tree untouched.
    ///
    /// The edge is trusted as given: it is neither re-validated nor moved
    /// into weight order.
    pub fn add_replacement_edge(&mut self, replacement: Option<Edge>) {
        if let Some(edge) = replacement {
            self.mst.push(edge);
            self.state = MaintenanceState::ReplacementAdded;
            info!(replacement = %edge, "added replacement edge");
        }
    }

    /// Runs one complete repair cycle for the tree edge at `index`.
    ///
    /// # Errors
    /// Returns [`MstError::EdgeIndexOutOfRange`] for an invalid `index`, in
    /// which case the tree is unchanged, and propagates component or search
    /// failures.
    #[instrument(
        name = "mst.repair",
        err,
        skip(self),
        fields(mst_edges = self.mst.len(), total_weight = self.total_weight()),
    )]
    pub fn repair(&mut self, index: usize) -> Result<RepairOutcome> {
        let removed = self.remove_edge(index)?;
        let components = self.components_after_removal(&removed)?;
        let replacement = self.find_replacement_edge(&removed, &components)?;
        self.add_replacement_edge(replacement);
        info!(
            reconnected = replacement.is_some(),
            total_weight = self.total_weight(),
            "repair cycle finished"
        );
        Ok(RepairOutcome {
            removed,
            components,
            replacement,
        })
    }
}
