//! Prim's algorithm as an independent MST oracle.
//!
//! Works on a dense adjacency matrix keeping the lightest edge per vertex
//! pair, so it shares no code or ordering assumptions with the Kruskal
//! implementation under test.

use crate::{Edge, EdgeId, Graph};

/// Returns the MST weight of `graph` ignoring the edge `excluded`, or `None`
/// when the remaining edges do not connect every vertex.
pub(super) fn prim_weight(graph: &Graph, excluded: Option<EdgeId>) -> Option<i128> {
    let n = graph.vertex_count();
    if n == 0 {
        return Some(0);
    }

    let mut lightest: Vec<Vec<Option<i64>>> = vec![vec![None; n]; n];
    for edge in graph.edges() {
        if Some(edge.id()) == excluded || edge.is_self_loop() {
            continue;
        }
        relax(&mut lightest, edge);
    }

    let mut in_tree = vec![false; n];
    let mut best: Vec<Option<i64>> = vec![None; n];
    best[0] = Some(0);
    let mut total = 0_i128;

    for _ in 0..n {
        let next = (0..n)
            .filter(|&vertex| !in_tree[vertex])
            .filter_map(|vertex| best[vertex].map(|weight| (weight, vertex)))
            .min()?;
        let (weight, vertex) = next;
        in_tree[vertex] = true;
        total += i128::from(weight);

        for other in 0..n {
            if in_tree[other] {
                continue;
            }
            if let Some(candidate) = lightest[vertex][other] {
                if best[other].is_none_or(|current| candidate < current) {
                    best[other] = Some(candidate);
                }
            }
        }
    }

    Some(total)
}

fn relax(lightest: &mut [Vec<Option<i64>>], edge: &Edge) {
    let (src, dest, weight) = edge.as_tuple();
    for (from, to) in [(src, dest), (dest, src)] {
        let slot = &mut lightest[from][to];
        if slot.is_none_or(|current| weight < current) {
            *slot = Some(weight);
        }
    }
}
