use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::storage::AdjMap;

use super::Error;

pub fn kahn<E>(graph: &AdjMap<usize, E>, vertex_count: usize) -> KahnIter<'_, E> {
    let mut in_deg = vec![0usize; vertex_count];
    let mut pending = None;

    'count: for (&v, successors) in graph.iter() {
        if v >= vertex_count {
            pending = Some(Error::VertexOutOfBounds {
                vertex: v,
                vertex_count,
            });
            break;
        }

        for successor in successors {
            match in_deg.get_mut(successor.id) {
                Some(deg) => *deg += 1,
                None => {
                    pending = Some(Error::VertexOutOfBounds {
                        vertex: successor.id,
                        vertex_count,
                    });
                    break 'count;
                }
            }
        }
    }

    let queue = if pending.is_some() {
        VecDeque::new()
    } else {
        (0..vertex_count).filter(|&v| in_deg[v] == 0).collect()
    };

    debug!(
        vertices = vertex_count,
        sources = queue.len(),
        "starting Kahn's algorithm"
    );

    KahnIter {
        graph,
        in_deg,
        queue,
        visited: 0,
        pending,
        done: false,
    }
}

pub struct KahnIter<'a, E> {
    graph: &'a AdjMap<usize, E>,
    in_deg: Vec<usize>,
    // FIFO, so that vertices are reported in the order their in degree dropped
    // to zero.
    queue: VecDeque<usize>,
    visited: usize,
    pending: Option<Error>,
    done: bool,
}

impl<E> KahnIter<'_, E> {
    fn cycle_error(&self) -> Error {
        // Every vertex that was not reported has an incoming edge from another
        // vertex that was not reported. Following these edges backwards must
        // eventually revisit a vertex, and after `n` steps the walk is
        // certainly on the cycle.
        let n = self.in_deg.len();
        let mut pred = vec![None; n];

        for (&v, successors) in self.graph.iter() {
            if self.in_deg[v] == 0 {
                continue;
            }
            for successor in successors {
                if self.in_deg[successor.id] > 0 {
                    pred[successor.id] = Some(v);
                }
            }
        }

        let mut vertex = self
            .in_deg
            .iter()
            .position(|&deg| deg > 0)
            .unwrap_or_default();

        for _ in 0..n {
            match pred[vertex] {
                Some(p) => vertex = p,
                None => break,
            }
        }

        Error::Cycle {
            vertex,
            unsorted: n - self.visited,
        }
    }
}

impl<E> Iterator for KahnIter<'_, E> {
    type Item = Result<usize, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if let Some(error) = self.pending.take() {
            self.done = true;
            return Some(Err(error));
        }

        if let Some(vertex) = self.queue.pop_front() {
            self.visited += 1;

            for successor in self.graph.successors(&vertex) {
                let deg = &mut self.in_deg[successor.id];
                *deg -= 1;

                if *deg == 0 {
                    self.queue.push_back(successor.id);
                }
            }

            trace!(vertex, queue = self.queue.len(), "vertex sorted");
            Some(Ok(vertex))
        } else {
            self.done = true;

            if self.visited != self.in_deg.len() {
                let error = self.cycle_error();
                debug!(%error, sorted = self.visited, "Kahn's algorithm found a cycle");
                Some(Err(error))
            } else {
                debug!(sorted = self.visited, "Kahn's algorithm finished");
                None
            }
        }
    }
}
