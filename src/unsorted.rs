//! Unsorted array priority queue
//!
//! Elements are kept in insertion order (modulo `swap_remove`) and every query
//! scans the whole array. This makes the implementation short enough to be
//! obviously correct, so it serves as the reference that
//! [`OptimizedHeapMinPq`](crate::optimized_heap::OptimizedHeapMinPq) is checked against.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(n)       |
//! | `contains`        | O(n)       |
//! | `get_priority`    | O(n)       |
//! | `peek_min`        | O(n)       |
//! | `remove_min`      | O(n)       |
//! | `change_priority` | O(n)       |
//! | `len`             | O(1)       |
//!
//! `add` is a plain append once the duplicate check has passed.

use crate::node::PriorityNode;
use crate::traits::{check_priority, MinPq, PqError};

/// A min-priority queue backed by an unsorted vector
#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPq<E> {
    nodes: Vec<PriorityNode<E>>,
}

impl<E: PartialEq> UnsortedArrayMinPq<E> {
    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.nodes.iter().position(|node| node.element() == element)
    }

    /// Index of the first node holding the minimum priority
    fn min_position(&self) -> Option<usize> {
        let mut nodes = self.nodes.iter().enumerate();
        let (mut min_idx, first) = nodes.next()?;
        let mut min_priority = first.priority();
        for (idx, node) in nodes {
            if node.priority() < min_priority {
                min_idx = idx;
                min_priority = node.priority();
            }
        }
        Some(min_idx)
    }
}

impl<E: PartialEq> MinPq<E> for UnsortedArrayMinPq<E> {
    fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    fn add(&mut self, element: E, priority: f64) -> Result<(), PqError> {
        check_priority(priority)?;
        if self.contains(&element) {
            return Err(PqError::DuplicateElement);
        }
        self.nodes.push(PriorityNode::new(element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    fn get_priority(&self, element: &E) -> Result<f64, PqError> {
        self.position(element)
            .map(|idx| self.nodes[idx].priority())
            .ok_or(PqError::NotFound)
    }

    fn peek_min(&self) -> Result<&E, PqError> {
        self.min_position()
            .map(|idx| self.nodes[idx].element())
            .ok_or(PqError::EmptyQueue)
    }

    fn remove_min_node(&mut self) -> Result<PriorityNode<E>, PqError> {
        let idx = self.min_position().ok_or(PqError::EmptyQueue)?;
        // No order is kept between the remaining nodes
        Ok(self.nodes.swap_remove(idx))
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), PqError> {
        check_priority(priority)?;
        let idx = self.position(element).ok_or(PqError::NotFound)?;
        self.nodes[idx].set_priority(priority);
        Ok(())
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<E: PartialEq> Default for UnsortedArrayMinPq<E> {
    fn default() -> Self {
        Self::new()
    }
}
