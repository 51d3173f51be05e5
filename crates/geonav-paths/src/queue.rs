//! Indexed binary min-heap with decrease-key.
//!
//! Entries are ordered by `(priority, insertion_order)`. Lower priorities are
//! polled first; ties are broken by insertion order (FIFO). A hash index from
//! item to heap slot makes `contains` O(1) and `change_priority` O(log n).

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use crate::traits::MinPriorityQueue;

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: f64,
    /// Monotonically increasing counter used to break ties.
    seq: u64,
}

impl<T> Entry<T> {
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.priority
            .total_cmp(&other.priority)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Default frontier for [`AStarSolver`](crate::AStarSolver).
#[derive(Debug)]
pub struct IndexedHeap<T> {
    heap: Vec<Entry<T>>,
    slots: HashMap<T, usize>,
    seq: u64,
}

impl<T: Eq + Hash + Clone> IndexedHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self {
            heap: Vec::new(),
            slots: HashMap::new(),
            seq: 0,
        }
    }

    /// Priority currently assigned to `item`.
    pub fn priority(&self, item: &T) -> Option<f64> {
        self.slots.get(item).map(|&i| self.heap[i].priority)
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.heap[a].cmp_key(&self.heap[b]) == Ordering::Less
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.reindex(a);
        self.reindex(b);
    }

    #[inline]
    fn reindex(&mut self, i: usize) {
        if let Some(slot) = self.slots.get_mut(&self.heap[i].item) {
            *slot = i;
        }
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<T: Eq + Hash + Clone> Default for IndexedHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> MinPriorityQueue<T> for IndexedHeap<T> {
    fn insert(&mut self, item: T, priority: f64) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }
        let seq = self.seq;
        self.seq += 1;
        let i = self.heap.len();
        self.slots.insert(item.clone(), i);
        self.heap.push(Entry {
            item,
            priority,
            seq,
        });
        self.sift_up(i);
        true
    }

    fn peek(&self) -> Option<&T> {
        self.heap.first().map(|e| &e.item)
    }

    fn poll(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.swap(0, last);
        let entry = self.heap.pop()?;
        self.slots.remove(&entry.item);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(entry.item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    fn change_priority(&mut self, item: &T, priority: f64) -> bool {
        let Some(&i) = self.slots.get(item) else {
            return false;
        };
        self.heap[i].priority = priority;
        self.sift_up(i);
        // The entry may have moved up; only sift down from where it now sits.
        if let Some(&j) = self.slots.get(item) {
            self.sift_down(j);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_basic_insert_poll() {
        let mut q = IndexedHeap::new();
        q.insert("a", 3.0);
        q.insert("b", 1.0);
        q.insert("c", 2.0);

        assert_eq!(q.peek(), Some(&"b"));
        assert_eq!(q.poll(), Some("b"));
        assert_eq!(q.poll(), Some("c"));
        assert_eq!(q.poll(), Some("a"));
        assert_eq!(q.poll(), None);
        assert_eq!(q.peek(), None);
    }

    #[test]
    fn test_fifo_same_priority() {
        let mut q = IndexedHeap::new();
        q.insert("first", 1.0);
        q.insert("second", 1.0);
        q.insert("third", 1.0);

        assert_eq!(q.poll(), Some("first"));
        assert_eq!(q.poll(), Some("second"));
        assert_eq!(q.poll(), Some("third"));
    }

    #[test]
    fn test_duplicate_insert_rejected() {
        let mut q = IndexedHeap::new();
        assert!(q.insert(7, 5.0));
        assert!(!q.insert(7, 1.0));
        assert_eq!(q.len(), 1);
        assert_eq!(q.priority(&7), Some(5.0));
    }

    #[test]
    fn test_change_priority() {
        let mut q = IndexedHeap::new();
        q.insert('a', 1.0);
        q.insert('b', 2.0);
        q.insert('c', 3.0);

        assert!(q.change_priority(&'c', 0.5));
        assert_eq!(q.peek(), Some(&'c'));

        assert!(q.change_priority(&'c', 10.0));
        assert_eq!(q.poll(), Some('a'));
        assert_eq!(q.poll(), Some('b'));
        assert_eq!(q.poll(), Some('c'));

        assert!(!q.change_priority(&'z', 1.0));
    }

    #[test]
    fn test_contains_and_len() {
        let mut q = IndexedHeap::<u32>::new();
        assert!(q.is_empty());
        assert!(!q.contains(&1));

        q.insert(1, 1.0);
        assert!(q.contains(&1));
        assert_eq!(q.len(), 1);

        q.poll();
        assert!(!q.contains(&1));
        assert!(q.is_empty());
    }

    #[test]
    fn test_random_ops_match_sorted_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut q = IndexedHeap::new();
        let mut expected = Vec::new();
        for item in 0..200u32 {
            let p = rng.random_range(0..50) as f64;
            q.insert(item, p);
            expected.push((p, item));
        }
        // Lower every third item's priority.
        for (p, item) in expected.iter_mut() {
            if *item % 3 == 0 {
                *p -= 25.0;
                assert!(q.change_priority(item, *p));
            }
        }

        let mut polled = Vec::new();
        while let Some(item) = q.poll() {
            polled.push(item);
        }
        assert_eq!(polled.len(), 200);

        let priorities: Vec<f64> = polled
            .iter()
            .map(|i| expected.iter().find(|(_, it)| it == i).map(|(p, _)| *p).unwrap())
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
    }
}
