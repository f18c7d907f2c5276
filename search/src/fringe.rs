//! The fringe: ordered working set of candidate paths.
//!
//! Stack and queue disciplines share a `VecDeque` (push front vs. push back,
//! always pop front). The priority discipline keeps a `BinaryHeap` keyed by
//! the [`Path`] total order, so uniform-cost insertion is O(log n) instead of
//! a full re-sort per expansion.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::path::Path;

/// How new paths are inserted into the fringe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FringeDisciplineV1 {
    /// Prepend: last inserted is popped first (depth-first).
    Stack,
    /// Append: first inserted is popped first (breadth-first).
    Queue,
    /// Keep sorted by the path total order (uniform-cost).
    Priority,
}

enum Entries<S> {
    Sequence(VecDeque<Path<S>>),
    // `BinaryHeap` is a max-heap, so `Reverse` pops the lowest path first.
    Heap(BinaryHeap<Reverse<Path<S>>>),
}

/// Fringe owned by a single search invocation.
pub struct Fringe<S> {
    discipline: FringeDisciplineV1,
    entries: Entries<S>,
    high_water: usize,
}

impl<S: Ord> Fringe<S> {
    /// Create a new empty fringe.
    #[must_use]
    pub fn new(discipline: FringeDisciplineV1) -> Self {
        let entries = match discipline {
            FringeDisciplineV1::Stack | FringeDisciplineV1::Queue => {
                Entries::Sequence(VecDeque::new())
            }
            FringeDisciplineV1::Priority => Entries::Heap(BinaryHeap::new()),
        };
        Self {
            discipline,
            entries,
            high_water: 0,
        }
    }

    #[must_use]
    pub fn discipline(&self) -> FringeDisciplineV1 {
        self.discipline
    }

    /// Insert a path according to the discipline.
    pub fn insert(&mut self, path: Path<S>) {
        match &mut self.entries {
            Entries::Sequence(deque) => {
                if self.discipline == FringeDisciplineV1::Stack {
                    deque.push_front(path);
                } else {
                    deque.push_back(path);
                }
            }
            Entries::Heap(heap) => heap.push(Reverse(path)),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove and return the first path.
    #[must_use]
    pub fn pop(&mut self) -> Option<Path<S>> {
        match &mut self.entries {
            Entries::Sequence(deque) => deque.pop_front(),
            Entries::Heap(heap) => heap.pop().map(|Reverse(path)| path),
        }
    }

    /// The paths in pop order, front to back.
    ///
    /// O(n) for stack/queue, O(n log n) for priority.
    #[must_use]
    pub fn snapshot(&self) -> Vec<&Path<S>> {
        match &self.entries {
            Entries::Sequence(deque) => deque.iter().collect(),
            Entries::Heap(heap) => {
                let mut paths: Vec<&Path<S>> = heap.iter().map(|Reverse(path)| path).collect();
                paths.sort();
                paths
            }
        }
    }

    /// Current fringe size.
    #[must_use]
    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Sequence(deque) => deque.len(),
            Entries::Heap(heap) => heap.len(),
        }
    }

    /// Whether the fringe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// High-water mark of fringe size.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
