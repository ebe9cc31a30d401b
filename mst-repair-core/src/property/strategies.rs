//! Graph generators for MST property-based tests.
//!
//! Each generator seeds a [`SmallRng`] so a failing proptest case can be
//! replayed from its `(shape, seed)` pair. Every graph starts from a random
//! spanning path, which keeps the input connected as the MST properties
//! assume.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphShape, RepairFixture};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 20;
/// Exclusive upper bound for wide-range weights.
const WIDE_WEIGHT_LIMIT: i64 = 10_000;

/// Generates fixtures across every [`GraphShape`].
pub(super) fn repair_fixture_strategy() -> impl Strategy<Value = RepairFixture> {
    (any::<GraphShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: GraphShape, rng: &mut SmallRng) -> RepairFixture {
    match shape {
        GraphShape::Unique => generate_probabilistic(rng, shape, MAX_VERTICES, (0.1, 0.4), wide),
        GraphShape::ManyIdentical => generate_identical(rng),
        GraphShape::Sparse => generate_sparse(rng),
        GraphShape::Dense => {
            generate_probabilistic(rng, shape, DENSE_MAX_VERTICES, (0.7, 0.95), wide)
        }
        GraphShape::TreeOnly => {
            let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
            let edges = spanning_path(vertex_count, rng, wide);
            RepairFixture {
                vertex_count,
                edges,
                shape,
            }
        }
    }
}

fn wide(rng: &mut SmallRng) -> i64 {
    rng.gen_range(-WIDE_WEIGHT_LIMIT..WIDE_WEIGHT_LIMIT)
}

/// Builds a random Hamiltonian path so the graph is connected.
fn spanning_path(
    vertex_count: usize,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> Vec<(usize, usize, i64)> {
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    order
        .windows(2)
        .map(|pair| (pair[0], pair[1], weight(rng)))
        .collect()
}

/// Adds each unordered pair with a sampled probability on top of a
/// spanning path.
fn generate_probabilistic(
    rng: &mut SmallRng,
    shape: GraphShape,
    max_vertices: usize,
    probability_range: (f64, f64),
    mut weight: impl FnMut(&mut SmallRng) -> i64,
) -> RepairFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let probability: f64 = rng.gen_range(probability_range.0..=probability_range.1);
    let mut edges = spanning_path(vertex_count, rng, &mut weight);

    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((left, right, weight(rng)));
            }
        }
    }

    // Interleave the path with the extra edges so tree edges are not always
    // first in scan order.
    shuffle_edges(&mut edges, rng);
    RepairFixture {
        vertex_count,
        edges,
        shape,
    }
}

fn generate_identical(rng: &mut SmallRng) -> RepairFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=5)).collect();
    generate_probabilistic(
        rng,
        GraphShape::ManyIdentical,
        MAX_VERTICES,
        (0.2, 0.6),
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

fn generate_sparse(rng: &mut SmallRng) -> RepairFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = spanning_path(vertex_count, rng, wide);

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let src = rng.gen_range(0..vertex_count);
        let dest = rng.gen_range(0..vertex_count);
        edges.push((src, dest, rng.gen_range(0..100)));
    }
    // Duplicate a random edge verbatim so parallel twins are exercised.
    if let Some(&twin) = edges.get(rng.gen_range(0..edges.len().max(1))) {
        edges.push(twin);
    }

    shuffle_edges(&mut edges, rng);
    RepairFixture {
        vertex_count,
        edges,
        shape: GraphShape::Sparse,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

fn shuffle_edges(edges: &mut [(usize, usize, i64)], rng: &mut SmallRng) {
    for i in (1..edges.len()).rev() {
        let j = rng.gen_range(0..=i);
        edges.swap(i, j);
    }
}

// `Arbitrary` is written by hand to bias sampling towards tied weights.
impl proptest::arbitrary::Arbitrary for GraphShape {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            1 => Just(Self::TreeOnly),
        ]
    }
}
