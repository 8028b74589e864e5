use std::{borrow::Borrow, hash::Hash};

use rustc_hash::FxHashMap;

/// Successor descriptor stored in an [`AdjMap`].
///
/// The attribute belongs to the descriptor itself, not to a `(from, to)` pair.
/// Two descriptors of the same successor may carry different attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Successor<V, E> {
    pub id: V,
    pub attr: E,
}

/// Directed graph stored as a mapping from a vertex to the ordered sequence of
/// its successors.
///
/// Vertices are arbitrary hashable keys. A vertex without outgoing edges does
/// not need to be present in the map; [`successors`](AdjMap::successors) treats
/// it as having none.
#[derive(Debug, Clone)]
pub struct AdjMap<V, E> {
    adj: FxHashMap<V, Vec<Successor<V, E>>>,
    edge_count: usize,
}

impl<V, E> Default for AdjMap<V, E> {
    fn default() -> Self {
        Self {
            adj: FxHashMap::default(),
            edge_count: 0,
        }
    }
}

impl<V, E> AdjMap<V, E>
where
    V: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the vertex with an empty successor list, if not present yet.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adj.entry(vertex).or_default();
    }

    /// Appends a successor descriptor to the list of `from`.
    ///
    /// The destination is not registered as a vertex on its own.
    pub fn add_edge(&mut self, from: V, to: V, attr: E) {
        self.adj
            .entry(from)
            .or_default()
            .push(Successor { id: to, attr });
        self.edge_count += 1;
    }

    pub fn extend_with_edges<I, T>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<(V, V, E)>,
    {
        for edge in iter {
            let (from, to, attr) = edge.into();
            self.add_edge(from, to, attr);
        }
    }

    /// Successors of the vertex in insertion order, empty if the vertex is not
    /// in the map.
    pub fn successors<Q>(&self, vertex: &Q) -> &[Successor<V, E>]
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adj.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_vertex<Q>(&self, vertex: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adj.contains_key(vertex)
    }

    /// Number of vertices that have an entry in the map.
    ///
    /// Vertices that appear only as successors are not counted.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices that have an entry in the map, in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adj.keys()
    }

    /// All entries of the map, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Successor<V, E>])> + '_ {
        self.adj.iter().map(|(v, succ)| (v, succ.as_slice()))
    }
}

impl<E> AdjMap<usize, E> {
    /// One past the largest vertex index mentioned either as a key or as a
    /// successor, zero for an empty graph.
    ///
    /// The bound depends on the largest index only, not on the number of
    /// vertices. A sparse graph using a huge index yields a huge bound.
    pub fn vertex_bound(&self) -> usize {
        self.adj
            .iter()
            .flat_map(|(v, succ)| std::iter::once(*v).chain(succ.iter().map(|s| s.id)))
            .max()
            .map_or(0, |max| max + 1)
    }
}

impl<V, E, T> FromIterator<T> for AdjMap<V, E>
where
    V: Eq + Hash,
    T: Into<(V, V, E)>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut graph = Self::new();
        graph.extend_with_edges(iter);
        graph
    }
}
