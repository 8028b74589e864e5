use std::fmt;

/// Weighted edge between two integer-indexed vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub src: usize,
    pub dest: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src: usize, dest: usize, weight: W) -> Self {
        Self { src, dest, weight }
    }

    /// Returns `true` if the edge starts and ends in the same vertex.
    pub fn is_loop(&self) -> bool {
        self.src == self.dest
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((src, dest, weight): (usize, usize, W)) -> Self {
        Self::new(src, dest, weight)
    }
}

impl<W: fmt::Display> fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.src, self.dest, self.weight)
    }
}
