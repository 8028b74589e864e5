use crate::core::Weight;

/// Estimate of the remaining cost from a vertex to the goal.
///
/// Any `Fn(&V, &V) -> W` closure is a heuristic.
pub trait Heuristic<V, W> {
    fn estimate(&self, vertex: &V, goal: &V) -> W;
}

impl<F, V, W> Heuristic<V, W> for F
where
    F: Fn(&V, &V) -> W,
{
    fn estimate(&self, vertex: &V, goal: &V) -> W {
        (self)(vertex, goal)
    }
}

/// Always estimates zero, which turns A* into Dijkstra's algorithm.
///
/// This is the default heuristic. It never overestimates, so the found path is
/// always a cheapest one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<V, W: Weight> Heuristic<V, W> for Zero {
    fn estimate(&self, _vertex: &V, _goal: &V) -> W {
        W::zero()
    }
}

/// Absolute difference of the Java `String.hashCode` values of the two labels,
/// modulo 10.
///
/// The estimate has no relation to the actual distance and may overestimate,
/// so the found path is not guaranteed to be a cheapest one. It exists to
/// reproduce the search order of programs that use this placeholder.
///
/// The hash is computed over UTF-16 code units with 32-bit wrapping
/// arithmetic. The one deviation from Java is the difference `i32::MIN`, whose
/// remainder is reported as 8 instead of -8.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabelHash;

impl<V, W> Heuristic<V, W> for LabelHash
where
    V: AsRef<str>,
    W: Weight + From<u8>,
{
    fn estimate(&self, vertex: &V, goal: &V) -> W {
        W::from(label_hash_distance(vertex.as_ref(), goal.as_ref()))
    }
}

fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
}

fn label_hash_distance(a: &str, b: &str) -> u8 {
    let diff = string_hash(a).wrapping_sub(string_hash(b)).wrapping_abs();
    // The remainder is in -9..=9, so the cast is lossless.
    (diff % 10).unsigned_abs() as u8
}
