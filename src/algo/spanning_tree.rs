//! Find a [minimum spanning forest] of an undirected weighted graph using
//! [Kruskal's algorithm].
//!
//! See available parameters [here](SpanningTreeBuilder#implementations).
//!
//! The graph is given as a list of [edges](Edge) between integer-indexed
//! vertices. Edge direction is ignored. The vertex set consists of all edge
//! endpoints and optionally the declared vertices `0..n`. If the graph is
//! connected, the result is a single spanning tree.
//!
//! [minimum spanning forest]: https://en.wikipedia.org/wiki/Minimum_spanning_tree
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm
//!
//! # Examples
//!
//! ```
//! use classic_graph::{algo::SpanningTree, core::Edge};
//!
//! let edges = [
//!     Edge::new(0, 1, 4u32),
//!     Edge::new(1, 2, 8),
//!     Edge::new(2, 3, 7),
//!     Edge::new(0, 2, 9),
//! ];
//!
//! let mst = SpanningTree::on(&edges).run();
//!
//! assert!(mst.is_spanning_tree());
//! assert_eq!(mst.total_weight(), &19);
//! ```

use std::{fmt, slice};

use crate::core::Edge;

mod builder;
mod kruskal;

pub use builder::SpanningTreeBuilder;

/// Minimum spanning forest.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    edges: Vec<Edge<W>>,
    total_weight: W,
    vertex_count: usize,
    tree_count: usize,
}

impl<W> SpanningTree<W> {
    /// Edges of the forest in the order they were accepted, that is, ordered
    /// by weight.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge<W>> {
        self.edges
    }

    pub fn iter(&self) -> slice::Iter<'_, Edge<W>> {
        self.edges.iter()
    }

    pub fn total_weight(&self) -> &W {
        &self.total_weight
    }

    /// Number of vertices spanned by the forest, including isolated ones.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of trees in the forest, which is the number of connected
    /// components of the graph.
    pub fn tree_count(&self) -> usize {
        self.tree_count
    }

    /// Returns `true` if the forest is a single tree.
    pub fn is_spanning_tree(&self) -> bool {
        self.tree_count == 1
    }
}

impl<'a, W> IntoIterator for &'a SpanningTree<W> {
    type Item = &'a Edge<W>;
    type IntoIter = slice::Iter<'a, Edge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: fmt::Display> fmt::Display for SpanningTree<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, edge) in self.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{edge}")?;
        }
        f.write_str("]")
    }
}

/// Order of edges with equal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Edges with equal weight keep their order from the input.
    #[default]
    Stable,

    /// Edges with equal weight are ordered by `(src, dest)`, so the result
    /// does not depend on the input order.
    Endpoints,
}

#[cfg(test)]
mod tests {
    use petgraph::{data::Element, graph::UnGraph};
    use proptest::prelude::*;

    use crate::{common::UnionFind, infra::proptest::edges};

    use super::*;

    fn e<W>(src: usize, dest: usize, weight: W) -> Edge<W> {
        Edge::new(src, dest, weight)
    }

    fn create_basic_graph() -> Vec<Edge<i32>> {
        vec![
            e(0, 1, 7),
            e(0, 3, 5),
            e(1, 2, 8),
            e(1, 3, 9),
            e(1, 4, 7),
            e(2, 4, 5),
            e(3, 4, 15),
            e(3, 5, 6),
            e(4, 5, 8),
            e(4, 6, 9),
            e(5, 6, 11),
        ]
    }

    fn assert_forest<W>(forest: &SpanningTree<W>) {
        let mut sets = UnionFind::new();
        for edge in forest {
            for v in [edge.src, edge.dest] {
                if !sets.contains(&v) {
                    sets.make_set(v);
                }
            }
            assert!(
                sets.union(&edge.src, &edge.dest),
                "edge {} - {} closes a cycle",
                edge.src,
                edge.dest
            );
        }
    }

    #[test]
    fn kruskal_tree_shaped() {
        let edges = [e(0, 1, 4), e(1, 2, 8), e(2, 3, 7)];
        let mst = SpanningTree::on(&edges).vertex_count(4).run();

        assert_eq!(mst.edges(), &[e(0, 1, 4), e(2, 3, 7), e(1, 2, 8)]);
        assert_eq!(mst.total_weight(), &19);
        assert_eq!(mst.vertex_count(), 4);
        assert!(mst.is_spanning_tree());
        assert_eq!(mst.to_string(), "[0 - 1 (4), 2 - 3 (7), 1 - 2 (8)]");
    }

    #[test]
    fn kruskal_basic() {
        let edges = create_basic_graph();
        let mst = SpanningTree::on(&edges).run();

        assert_eq!(mst.total_weight(), &39);
        assert_eq!(mst.edges().len(), 6);
        assert_eq!(mst.tree_count(), 1);
        assert_forest(&mst);
    }

    #[test]
    fn kruskal_disconnected() {
        let edges = [e(0, 1, 1), e(1, 2, 2), e(0, 2, 3), e(3, 4, 1)];
        let mst = SpanningTree::on(&edges).run();

        assert_eq!(mst.edges(), &[e(0, 1, 1), e(3, 4, 1), e(1, 2, 2)]);
        assert_eq!(mst.total_weight(), &4);
        assert_eq!(mst.tree_count(), 2);
        assert!(!mst.is_spanning_tree());
    }

    #[test]
    fn kruskal_declared_isolated_vertices() {
        let edges = [e(0, 1, 1)];
        let mst = SpanningTree::on(&edges).vertex_count(4).run();

        assert_eq!(mst.vertex_count(), 4);
        assert_eq!(mst.tree_count(), 3);
    }

    #[test]
    fn kruskal_undeclared_vertices_tolerated() {
        let edges = [e(0, 1, 2), e(1, 9, 3)];
        let mst = SpanningTree::on(&edges).vertex_count(2).run();

        assert_eq!(mst.edges().len(), 2);
        assert_eq!(mst.vertex_count(), 3);
        assert!(mst.is_spanning_tree());
    }

    #[test]
    fn kruskal_loops_and_parallel_edges() {
        let edges = [e(0, 0, 0), e(0, 1, 5), e(1, 0, 3)];
        let mst = SpanningTree::on(&edges).run();

        assert_eq!(mst.into_edges(), vec![e(1, 0, 3)]);
    }

    #[test]
    fn kruskal_empty() {
        let mst = SpanningTree::<u32>::on(&[]).run();

        assert!(mst.edges().is_empty());
        assert_eq!(mst.total_weight(), &0);
        assert_eq!(mst.tree_count(), 0);
        assert_eq!(mst.to_string(), "[]");
    }

    #[test]
    fn kruskal_tie_break() {
        let edges = [e(2, 3, 1), e(0, 1, 1), e(1, 2, 1), e(0, 3, 1)];

        let stable = SpanningTree::on(&edges).run();
        assert_eq!(stable.edges(), &[e(2, 3, 1), e(0, 1, 1), e(1, 2, 1)]);

        let endpoints = SpanningTree::on(&edges)
            .tie_break(TieBreak::Endpoints)
            .run();
        assert_eq!(endpoints.edges(), &[e(0, 1, 1), e(0, 3, 1), e(1, 2, 1)]);
    }

    #[test]
    fn kruskal_float_weights() {
        let edges = [e(0, 1, 0.5f64), e(1, 2, -1.5), e(0, 2, 0.25)];
        let mst = SpanningTree::on(&edges).run();

        assert_eq!(mst.edges(), &[e(1, 2, -1.5), e(0, 2, 0.25)]);
        assert_eq!(mst.total_weight(), &-1.25);
    }

    #[test]
    fn kruskal_float_weights_nan_sorts_last() {
        let edges = [e(0, 1, 3.0f64), e(1, 2, f64::NAN), e(2, 3, 1.0), e(0, 3, 2.0)];
        let mst = SpanningTree::on(&edges).run();

        assert_eq!(mst.edges(), &[e(2, 3, 1.0), e(0, 3, 2.0), e(0, 1, 3.0)]);
        assert_eq!(mst.total_weight(), &6.0);
        assert!(mst.is_spanning_tree());
    }

    #[test]
    fn kruskal_float_weights_signed_zeros() {
        let edges = [e(0, 1, 0.0f64), e(1, 2, 5.0), e(0, 2, -0.0)];
        let mst = SpanningTree::on(&edges).run();

        let endpoints = mst
            .iter()
            .map(|edge| (edge.src, edge.dest))
            .collect::<Vec<_>>();
        assert_eq!(endpoints, vec![(0, 2), (0, 1)]);
        assert!(mst.edges()[0].weight.is_sign_negative());
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_kruskal_agrees_with_petgraph((n, edge_list) in edges(32, 0u32..1000)) {
            let mst = SpanningTree::on(&edge_list).vertex_count(n).run();
            assert_forest(&mst);

            let mut reference = UnGraph::<(), u32>::with_capacity(n, edge_list.len());
            for _ in 0..n {
                reference.add_node(());
            }
            for edge in &edge_list {
                reference.add_edge((edge.src as u32).into(), (edge.dest as u32).into(), edge.weight);
            }

            let mut weight = 0;
            let mut count = 0;
            for element in petgraph::algo::min_spanning_tree(&reference) {
                if let Element::Edge { weight: w, .. } = element {
                    weight += w;
                    count += 1;
                }
            }

            prop_assert_eq!(*mst.total_weight(), weight);
            prop_assert_eq!(mst.edges().len(), count);
            prop_assert_eq!(mst.tree_count(), n - count);
        }
    }
}
