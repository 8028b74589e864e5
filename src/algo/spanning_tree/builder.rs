use crate::core::{Edge, Weight};

use super::{kruskal::kruskal, SpanningTree, TieBreak};

pub struct SpanningTreeBuilder<'a, W> {
    edges: &'a [Edge<W>],
    vertex_count: Option<usize>,
    tie_break: TieBreak,
}

impl<W> SpanningTree<W> {
    pub fn on(edges: &[Edge<W>]) -> SpanningTreeBuilder<'_, W> {
        SpanningTreeBuilder {
            edges,
            vertex_count: None,
            tie_break: TieBreak::Stable,
        }
    }
}

impl<'a, W> SpanningTreeBuilder<'a, W> {
    /// Declares vertices `0..vertex_count` in addition to the edge endpoints.
    ///
    /// Declared vertices without edges become single-vertex trees of the
    /// forest. Endpoints outside the range are still accepted.
    pub fn vertex_count(self, vertex_count: usize) -> Self {
        Self {
            vertex_count: Some(vertex_count),
            ..self
        }
    }

    pub fn tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    pub fn run(self) -> SpanningTree<W>
    where
        W: Weight,
    {
        kruskal(self.edges, self.vertex_count, self.tie_break)
    }
}
