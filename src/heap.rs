//! Comparator-driven binary heap.
//!
//! The queue is parameterized by an "is-worse-than" predicate: `worse(a, b)`
//! returns `true` when `a` ranks below `b`, so the best element according to
//! the predicate is always at the root. Duplicate entries for the same
//! logical key are allowed; deciding whether a popped entry is stale is the
//! consumer's job, not the queue's (see [`DirectedGraph::dijkstra`]).
//!
//! [`DirectedGraph::dijkstra`]: crate::graph::DirectedGraph::dijkstra

/// Binary heap ordered by an "is-worse-than" comparator.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    items: Vec<T>,
    worse: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty queue ordered by `worse`.
    pub fn new(worse: F) -> Self {
        Self {
            items: Vec::new(),
            worse,
        }
    }

    /// Create a queue ordered by `worse`, seeded from `items`.
    pub fn with_items(worse: F, items: Vec<T>) -> Self {
        let mut queue = Self::new(worse);
        for item in items {
            queue.push(item);
        }
        queue
    }

    /// Number of entries currently in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The best entry, if any, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert an entry and sift it toward the root.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the best entry. The last entry moves to the root
    /// and sifts toward the leaves.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if (self.worse)(&self.items[parent], &self.items[idx]) {
                self.items.swap(parent, idx);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        loop {
            let left = idx * 2 + 1;
            let right = idx * 2 + 2;
            let mut best = idx;
            if left < self.items.len() && (self.worse)(&self.items[best], &self.items[left]) {
                best = left;
            }
            if right < self.items.len() && (self.worse)(&self.items[best], &self.items[right]) {
                best = right;
            }
            if best == idx {
                break;
            }
            self.items.swap(idx, best);
            idx = best;
        }
    }
}
