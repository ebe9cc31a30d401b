//! Property-based tests for MST construction and single-edge repair.
//!
//! Verifies Kruskal's output against a Prim's oracle, checks that removing
//! any tree edge leaves a two-way partition, and confirms that the chosen
//! replacement restores a minimum spanning tree of the graph without the
//! removed edge.

mod oracle;
mod replacement;
mod strategies;
mod structural;
