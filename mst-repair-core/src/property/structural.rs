//! MST construction and partition properties.
//!
//! - **Oracle equivalence**: a connected input yields `n - 1` edges whose
//!   total weight matches Prim's algorithm.
//! - **Acyclicity**: the tree never closes a cycle.
//! - **Two-way split**: removing any tree edge leaves exactly two disjoint
//!   components that together cover every vertex.
//! - **Idempotence**: recomputing the components gives the same partition.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{DisjointSet, Edge, total_weight};

use super::oracle::prim_weight;
use super::types::RepairFixture;

/// Runs the oracle-equivalence and acyclicity checks for `fixture`.
pub(super) fn run_mst_oracle_property(fixture: &RepairFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let mst = graph.build_mst().map_err(|e| {
        TestCaseError::fail(format!("build_mst failed: {e} ({})", fixture.describe()))
    })?;

    let expected_len = fixture.vertex_count.saturating_sub(1);
    if mst.len() != expected_len {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected {expected_len} ({})",
            mst.len(),
            fixture.describe(),
        )));
    }

    validate_acyclic(fixture.vertex_count, &mst)?;

    let oracle = prim_weight(&graph, None).ok_or_else(|| {
        TestCaseError::fail(format!(
            "oracle found a disconnected input ({})",
            fixture.describe()
        ))
    })?;
    let actual = total_weight(&mst);
    if actual != oracle {
        return Err(TestCaseError::fail(format!(
            "total weight {actual}, oracle {oracle} ({})",
            fixture.describe(),
        )));
    }
    Ok(())
}

/// Removes every tree edge in turn and checks the resulting partition.
pub(super) fn run_partition_property(fixture: &RepairFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let mst = graph.build_mst().map_err(|e| {
        TestCaseError::fail(format!("build_mst failed: {e} ({})", fixture.describe()))
    })?;

    for removed in &mst {
        let components = graph
            .find_components(&mst, removed)
            .map_err(|e| TestCaseError::fail(format!("find_components failed: {e}")))?;

        if components.len() != 2 {
            return Err(TestCaseError::fail(format!(
                "removing {removed} left {} components ({})",
                components.len(),
                fixture.describe(),
            )));
        }

        let mut seen = vec![false; fixture.vertex_count];
        for vertex in components.iter().flatten() {
            match seen.get_mut(*vertex) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(TestCaseError::fail(format!(
                        "vertex {vertex} listed twice or out of range after removing {removed}"
                    )));
                }
            }
        }
        if seen.iter().any(|covered| !covered) {
            return Err(TestCaseError::fail(format!(
                "partition after removing {removed} misses a vertex ({})",
                fixture.describe(),
            )));
        }

        if components.component_of(removed.src()) == components.component_of(removed.dest()) {
            return Err(TestCaseError::fail(format!(
                "removed edge {removed} does not straddle the split"
            )));
        }

        let again = graph
            .find_components(&mst, removed)
            .map_err(|e| TestCaseError::fail(format!("find_components failed: {e}")))?;
        if again != components {
            return Err(TestCaseError::fail(format!(
                "component discovery is not idempotent for {removed}"
            )));
        }
    }
    Ok(())
}

/// Detects cycles in `edges` using a fresh union-find.
pub(super) fn validate_acyclic(vertex_count: usize, edges: &[Edge]) -> TestCaseResult {
    let mut sets = DisjointSet::new(vertex_count);
    for (i, edge) in edges.iter().enumerate() {
        let merged = sets
            .union(edge.src(), edge.dest())
            .map_err(|e| TestCaseError::fail(format!("edge {i}: {e}")))?;
        if !merged {
            return Err(TestCaseError::fail(format!(
                "edge {i}: {edge} creates a cycle"
            )));
        }
    }
    Ok(())
}
