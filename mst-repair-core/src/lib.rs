//! Minimum spanning tree construction and single-edge repair.
//!
//! A [`Graph`] builds its MST with Kruskal's algorithm over a stable weight
//! sort. After a tree edge is removed, the vertices split into two
//! [`Components`] and the cheapest non-tree edge crossing them restores a
//! minimum spanning tree. [`MstManager`] owns one tree and drives that repair
//! cycle.
//!
//! Edges carry an [`EdgeId`] assigned on insertion; tree membership, removal,
//! and the replacement scan all match edges by that identity, so parallel
//! edges with the same endpoints and weight never shadow each other.

mod components;
mod edge;
mod error;
mod graph;
mod maintenance;
mod union_find;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    components::Components,
    edge::{Edge, EdgeId},
    error::{MstError, MstErrorCode, Result},
    graph::{Graph, total_weight},
    maintenance::{MaintenanceState, MstManager, RepairOutcome},
    union_find::DisjointSet,
};
