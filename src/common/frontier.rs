use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// Min-priority queue of items awaiting expansion.
///
/// Items with equal priority are popped in the order they were pushed. The
/// same item may be pushed multiple times; every push is a separate entry.
#[derive(Debug)]
pub struct Frontier<T, P> {
    heap: BinaryHeap<Reverse<Entry<T, P>>>,
    seq: u64,
}

#[derive(Debug)]
struct Entry<T, P> {
    priority: P,
    seq: u64,
    item: T,
}

impl<T, P: Ord> PartialEq for Entry<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord> Eq for Entry<T, P> {}

impl<T, P: Ord> PartialOrd for Entry<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord> Ord for Entry<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl<T, P: Ord> Default for Frontier<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Ord> Frontier<T, P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            priority,
            seq,
            item,
        }));
    }

    /// Removes the item with the lowest priority.
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority))
    }

    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|Reverse(entry)| &entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
