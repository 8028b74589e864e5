use crate::storage::AdjMap;

use super::{kahn::kahn, TopoSort};

pub struct TopoSortBuilder<'a, E> {
    graph: &'a AdjMap<usize, E>,
    vertex_count: Option<usize>,
}

impl<E> TopoSort<'_, E> {
    pub fn on(graph: &AdjMap<usize, E>) -> TopoSortBuilder<'_, E> {
        TopoSortBuilder {
            graph,
            vertex_count: None,
        }
    }
}

impl<'a, E> TopoSortBuilder<'a, E> {
    /// Sets the number of vertices. The graph then consists of vertices
    /// `0..vertex_count`.
    ///
    /// Defaults to [`AdjMap::vertex_bound`].
    ///
    /// The algorithm allocates per-vertex state for the whole range, so the
    /// memory used is proportional to `vertex_count` (or to the largest index
    /// in the graph when left at the default). For sparse graphs with large
    /// indices, remap the indices to a dense range first. Indices at or above
    /// an explicitly set count are reported as
    /// [`VertexOutOfBounds`](super::Error::VertexOutOfBounds) without
    /// allocating for them.
    pub fn vertex_count(self, vertex_count: usize) -> Self {
        Self {
            vertex_count: Some(vertex_count),
            ..self
        }
    }

    pub fn run(self) -> TopoSort<'a, E> {
        let vertex_count = self
            .vertex_count
            .unwrap_or_else(|| self.graph.vertex_bound());

        TopoSort {
            inner: kahn(self.graph, vertex_count),
        }
    }
}
