//! Indexed binary heap priority queue
//!
//! A binary min-heap stored in a vector, paired with a hash map from each
//! element to its current slot. The map makes `contains` and `get_priority`
//! O(1) and lets `change_priority` find the slot to repair without a scan.
//!
//! The slot layout is 0-indexed: the parent of `i` is `(i - 1) / 2` and its
//! children are `2i + 1` and `2i + 2`. Every exchange of two slots goes through
//! [`swap_slots`](OptimizedHeapMinPq::swap_slots), which rewrites both map
//! entries along with the vector so the two structures cannot drift apart.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `contains`        | O(1)       |
//! | `get_priority`    | O(1)       |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//! | `len`             | O(1)       |
//!
//! # Example
//!
//! ```rust
//! use minpq::MinPq;
//! use minpq::optimized_heap::OptimizedHeapMinPq;
//!
//! let mut pq = OptimizedHeapMinPq::new();
//! pq.add("A", 5.0).unwrap();
//! pq.add("B", 3.0).unwrap();
//! pq.add("C", 8.0).unwrap();
//!
//! pq.change_priority(&"C", 0.0).unwrap();
//! assert_eq!(pq.remove_min(), Ok("C"));
//! assert_eq!(pq.remove_min(), Ok("B"));
//! assert_eq!(pq.remove_min(), Ok("A"));
//! assert!(pq.is_empty());
//! ```

use crate::node::PriorityNode;
use crate::traits::{check_priority, MinPq, PqError};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A binary min-heap with an element-to-slot index
///
/// Each element is stored twice: once in its heap slot and once as a key of
/// the index, so `E` must be `Clone`.
#[derive(Debug, Clone)]
pub struct OptimizedHeapMinPq<E: Eq + Hash> {
    /// Heap-ordered slots
    nodes: Vec<PriorityNode<E>>,
    /// Maps each element to the slot in `nodes` holding it
    index: FxHashMap<E, usize>,
}

impl<E: Eq + Hash + Clone> OptimizedHeapMinPq<E> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.index.clear();
    }

    /// Iterates over the stored nodes in slot order, which is not priority order
    pub fn iter(&self) -> std::slice::Iter<'_, PriorityNode<E>> {
        self.nodes.iter()
    }

    /// Exchanges two slots and re-points both index entries
    fn swap_slots(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
        if let Some(slot) = self.index.get_mut(self.nodes[i].element()) {
            *slot = i;
        }
        if let Some(slot) = self.index.get_mut(self.nodes[j].element()) {
            *slot = j;
        }
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.nodes[i].priority() < self.nodes[j].priority()
    }

    /// Move the node at index up while it is smaller than its parent
    fn swim(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.less(index, parent) {
                self.swap_slots(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move the node at index down while a child is smaller than it
    fn sink(&mut self, mut index: usize) {
        let len = self.nodes.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }

            if smallest != index {
                self.swap_slots(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<E: Eq + Hash + Clone> MinPq<E> for OptimizedHeapMinPq<E> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    fn add(&mut self, element: E, priority: f64) -> Result<(), PqError> {
        check_priority(priority)?;
        if self.index.contains_key(&element) {
            return Err(PqError::DuplicateElement);
        }
        let slot = self.nodes.len();
        self.index.insert(element.clone(), slot);
        self.nodes.push(PriorityNode::new(element, priority));
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.index.contains_key(element)
    }

    fn get_priority(&self, element: &E) -> Result<f64, PqError> {
        let slot = *self.index.get(element).ok_or(PqError::NotFound)?;
        Ok(self.nodes[slot].priority())
    }

    fn peek_min(&self) -> Result<&E, PqError> {
        self.nodes
            .first()
            .map(PriorityNode::element)
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min_node(&mut self) -> Result<PriorityNode<E>, PqError> {
        if self.nodes.is_empty() {
            return Err(PqError::EmptyQueue);
        }

        let last = self.nodes.len() - 1;
        self.swap_slots(0, last);
        let min = self.nodes.pop().ok_or(PqError::EmptyQueue)?;
        self.index.remove(min.element());

        if !self.nodes.is_empty() {
            self.sink(0);
        }

        Ok(min)
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), PqError> {
        check_priority(priority)?;
        let slot = *self.index.get(element).ok_or(PqError::NotFound)?;
        let old = self.nodes[slot].priority();
        self.nodes[slot].set_priority(priority);

        if priority < old {
            self.swim(slot);
        } else {
            self.sink(slot);
        }
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<E: Eq + Hash + Clone> Default for OptimizedHeapMinPq<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Checks heap order and that the index is the exact inverse of the slots
    fn assert_invariants<E: Eq + Hash + Clone + std::fmt::Debug>(pq: &OptimizedHeapMinPq<E>) {
        for i in 1..pq.nodes.len() {
            let parent = (i - 1) / 2;
            assert!(
                pq.nodes[parent].priority() <= pq.nodes[i].priority(),
                "slot {} (priority {}) is below its parent {} (priority {})",
                i,
                pq.nodes[i].priority(),
                parent,
                pq.nodes[parent].priority()
            );
        }

        assert_eq!(pq.index.len(), pq.nodes.len());
        for (slot, node) in pq.nodes.iter().enumerate() {
            assert_eq!(pq.index.get(node.element()), Some(&slot));
        }
    }

    #[test]
    fn test_basic_operations() {
        let mut pq = OptimizedHeapMinPq::new();

        assert!(pq.is_empty());
        assert_eq!(pq.peek_min(), Err(PqError::EmptyQueue));

        pq.add("three", 3.0).unwrap();
        pq.add("one", 1.0).unwrap();
        pq.add("two", 2.0).unwrap();
        assert_invariants(&pq);

        assert_eq!(pq.len(), 3);
        assert_eq!(pq.peek_min(), Ok(&"one"));

        assert_eq!(pq.remove_min(), Ok("one"));
        assert_invariants(&pq);
        assert_eq!(pq.remove_min(), Ok("two"));
        assert_eq!(pq.remove_min(), Ok("three"));
        assert_eq!(pq.remove_min(), Err(PqError::EmptyQueue));
        assert!(pq.index.is_empty());
    }

    #[test]
    fn test_increase_key_sinks() {
        let mut pq = OptimizedHeapMinPq::new();
        for i in 0..15 {
            pq.add(i, i as f64).unwrap();
        }

        pq.change_priority(&0, 100.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&1));
        // Sank all the way to a leaf
        assert!(pq.index[&0] >= pq.len() / 2);
    }

    #[test]
    fn test_decrease_key_swims() {
        let mut pq = OptimizedHeapMinPq::new();
        for i in 0..15 {
            pq.add(i, i as f64).unwrap();
        }

        pq.change_priority(&14, -1.0).unwrap();
        assert_invariants(&pq);
        assert_eq!(pq.peek_min(), Ok(&14));
        assert_eq!(pq.index[&14], 0);
    }

    #[test]
    fn test_unchanged_priority_is_noop() {
        let mut pq = OptimizedHeapMinPq::new();
        for i in 0..7 {
            pq.add(i, 1.0).unwrap();
        }
        let before: Vec<_> = pq.iter().map(|n| *n.element()).collect();

        pq.change_priority(&3, 1.0).unwrap();
        let after: Vec<_> = pq.iter().map(|n| *n.element()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clear() {
        let mut pq = OptimizedHeapMinPq::with_capacity(4);
        pq.add('a', 1.0).unwrap();
        pq.add('b', 2.0).unwrap();
        pq.clear();

        assert!(pq.is_empty());
        assert!(!pq.contains(&'a'));
        pq.add('a', 3.0).unwrap();
        assert_invariants(&pq);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, i16),
        RemoveMin,
        Change(u8, i16),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<u8>(), -50i16..50).prop_map(|(e, p)| Op::Add(e, p)),
            Just(Op::RemoveMin),
            (any::<u8>(), -50i16..50).prop_map(|(e, p)| Op::Change(e, p)),
        ]
    }

    proptest! {
        #[test]
        fn test_invariants_hold_after_every_op(ops in prop::collection::vec(op_strategy(), 0..200)) {
            let mut pq = OptimizedHeapMinPq::new();
            let mut expected_len = 0usize;

            for op in ops {
                match op {
                    Op::Add(e, p) => {
                        if pq.add(e, p as f64).is_ok() {
                            expected_len += 1;
                        }
                    }
                    Op::RemoveMin => {
                        if pq.remove_min().is_ok() {
                            expected_len -= 1;
                        }
                    }
                    Op::Change(e, p) => {
                        let _ = pq.change_priority(&e, p as f64);
                    }
                }
                assert_invariants(&pq);
                prop_assert_eq!(pq.len(), expected_len);
            }
        }
    }
}
