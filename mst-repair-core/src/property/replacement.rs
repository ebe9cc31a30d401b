//! Replacement-edge properties.
//!
//! For every tree edge of a generated graph:
//!
//! - the chosen replacement is a non-tree edge of minimal crossing weight,
//!   confirmed by brute force;
//! - when nothing crosses the split, no replacement is returned;
//! - re-attaching the replacement restores a spanning tree whose weight
//!   equals Prim's MST of the graph without the removed edge.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, MstManager, total_weight};

use super::oracle::prim_weight;
use super::structural::validate_acyclic;
use super::types::RepairFixture;

/// Runs the replacement checks for every removable tree edge.
pub(super) fn run_replacement_property(fixture: &RepairFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let tree_len = fixture.vertex_count.saturating_sub(1);

    for index in 0..tree_len {
        let mut manager = MstManager::new(graph.clone())
            .map_err(|e| TestCaseError::fail(format!("MstManager::new failed: {e}")))?;
        let outcome = manager
            .repair(index)
            .map_err(|e| TestCaseError::fail(format!("repair({index}) failed: {e}")))?;

        let remaining: Vec<Edge> = manager
            .edges()
            .iter()
            .copied()
            .filter(|edge| Some(*edge) != outcome.replacement)
            .collect();
        let brute_force = graph
            .edges()
            .iter()
            .filter(|edge| edge.id() != outcome.removed.id() && !remaining.contains(edge))
            .filter(|edge| {
                let src = outcome.components.component_of(edge.src());
                let dest = outcome.components.component_of(edge.dest());
                src != dest
            })
            .map(Edge::weight)
            .min();

        let chosen = outcome.replacement.map(|edge| edge.weight());
        if chosen != brute_force {
            return Err(TestCaseError::fail(format!(
                "removing {}: replacement weight {chosen:?}, brute force {brute_force:?} ({})",
                outcome.removed,
                fixture.describe(),
            )));
        }

        let oracle = prim_weight(&graph, Some(outcome.removed.id()));
        match (outcome.replacement, oracle) {
            (Some(_), Some(expected)) => {
                validate_acyclic(fixture.vertex_count, manager.edges())?;
                if manager.edges().len() != tree_len {
                    return Err(TestCaseError::fail(format!(
                        "repaired tree has {} edges, expected {tree_len}",
                        manager.edges().len(),
                    )));
                }
                let actual = total_weight(manager.edges());
                if actual != expected {
                    return Err(TestCaseError::fail(format!(
                        "repaired weight {actual}, oracle {expected} after removing {} ({})",
                        outcome.removed,
                        fixture.describe(),
                    )));
                }
            }
            (None, None) => {}
            (replacement, oracle) => {
                return Err(TestCaseError::fail(format!(
                    "replacement {replacement:?} disagrees with oracle connectivity {oracle:?} ({})",
                    fixture.describe(),
                )));
            }
        }
    }
    Ok(())
}
