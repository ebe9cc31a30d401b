//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph contains a random spanning tree, so it is connected
//! and its MST has `vertex_count - 1` edges. Extra random edges on top give
//! the replacement search non-tree candidates to scan.

use mst_repair_core::{Graph, MstError};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Inclusive bounds for generated edge weights.
const MIN_WEIGHT: i64 = 1;
const MAX_WEIGHT: i64 = 1_000;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// Adding a generated edge failed.
    #[error(transparent)]
    Graph(#[from] MstError),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Non-tree edges added per vertex.
    pub extra_edges_per_vertex: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from `config`.
///
/// # Errors
///
/// Returns [`SyntheticError::ZeroVertices`] if `vertex_count` is zero.
///
/// # Examples
///
/// ```
/// use mst_repair_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig { vertex_count: 8, extra_edges_per_vertex: 2, seed: 7 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.edges().len(), 7 + 16);
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new(config.vertex_count);

    for vertex in 1..config.vertex_count {
        let parent = rng.gen_range(0..vertex);
        graph.add_edge(parent, vertex, random_weight(&mut rng))?;
    }

    let extra = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extra {
        let src = rng.gen_range(0..config.vertex_count);
        let dest = rng.gen_range(0..config.vertex_count);
        graph.add_edge(src, dest, random_weight(&mut rng))?;
    }

    Ok(graph)
}

fn random_weight(rng: &mut SmallRng) -> i64 {
    rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT)
}
