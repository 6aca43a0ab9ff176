//! Common trait and error type for the min-priority queues
//!
//! Both queues in this crate implement [`MinPq`]:
//!
//! - [`UnsortedArrayMinPq`](crate::unsorted::UnsortedArrayMinPq): linear scans, used as a
//!   reference implementation
//! - [`OptimizedHeapMinPq`](crate::optimized_heap::OptimizedHeapMinPq): binary heap plus an
//!   element index, O(log n) for every mutating operation
//!
//! Unlike the standard library's `BinaryHeap`, elements are addressed by value:
//! an element can be looked up, re-prioritized, or tested for membership
//! without holding a handle.

use crate::node::PriorityNode;
use thiserror::Error;
use tracing::trace;

/// Error type for priority queue operations
///
/// A call that returns an error leaves the queue unchanged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PqError {
    /// The element is already in the queue
    #[error("element is already present in the queue")]
    DuplicateElement,
    /// The element is not in the queue
    #[error("element is not present in the queue")]
    NotFound,
    /// The queue has no elements to return
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The priority is NaN and cannot be ordered
    #[error("priority must not be NaN")]
    InvalidPriority,
}

pub(crate) fn check_priority(priority: f64) -> Result<(), PqError> {
    if priority.is_nan() {
        Err(PqError::InvalidPriority)
    } else {
        Ok(())
    }
}

/// A min-priority queue of unique elements with mutable priorities
///
/// Lower priorities are removed first. Elements with equal priorities come out
/// in an implementation-defined order.
///
/// # Example
///
/// ```rust
/// use minpq::MinPq;
/// use minpq::optimized_heap::OptimizedHeapMinPq;
///
/// let mut pq = OptimizedHeapMinPq::new();
/// pq.add("a", 5.0).unwrap();
/// pq.add("b", 3.0).unwrap();
/// pq.add("c", 8.0).unwrap();
///
/// pq.change_priority(&"a", 1.0).unwrap();
/// assert_eq!(pq.peek_min(), Ok(&"a"));
/// assert_eq!(pq.remove_min(), Ok("a"));
/// assert_eq!(pq.remove_min(), Ok("b"));
/// ```
pub trait MinPq<E> {
    /// Creates a new empty queue
    fn new() -> Self;

    /// Adds an element with the given priority
    ///
    /// # Errors
    /// - [`PqError::DuplicateElement`] if the element is already present
    /// - [`PqError::InvalidPriority`] if `priority` is NaN
    fn add(&mut self, element: E, priority: f64) -> Result<(), PqError>;

    /// Returns true if the element is in the queue
    fn contains(&self, element: &E) -> bool;

    /// Returns the priority currently associated with the element
    ///
    /// # Errors
    /// [`PqError::NotFound`] if the element is absent.
    fn get_priority(&self, element: &E) -> Result<f64, PqError>;

    /// Returns the element with the minimum priority without removing it
    ///
    /// # Errors
    /// [`PqError::EmptyQueue`] if there are no elements.
    fn peek_min(&self) -> Result<&E, PqError>;

    /// Removes the element with the minimum priority, returning it together
    /// with that priority
    ///
    /// # Errors
    /// [`PqError::EmptyQueue`] if there are no elements.
    fn remove_min_node(&mut self) -> Result<PriorityNode<E>, PqError>;

    /// Replaces the priority of an element already in the queue
    ///
    /// The new priority may be lower or higher than the current one.
    ///
    /// # Errors
    /// - [`PqError::NotFound`] if the element is absent
    /// - [`PqError::InvalidPriority`] if `priority` is NaN
    fn change_priority(&mut self, element: &E, priority: f64) -> Result<(), PqError>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns the element with the minimum priority
    ///
    /// # Errors
    /// [`PqError::EmptyQueue`] if there are no elements.
    fn remove_min(&mut self) -> Result<E, PqError> {
        self.remove_min_node().map(PriorityNode::into_element)
    }

    /// Returns the minimum priority without removing anything
    fn peek_min_priority(&self) -> Result<f64, PqError> {
        let min = self.peek_min()?;
        self.get_priority(min)
    }

    /// Adds the element, or changes its priority if it is already present
    fn add_or_change_priority(&mut self, element: E, priority: f64) -> Result<(), PqError> {
        if self.contains(&element) {
            self.change_priority(&element, priority)
        } else {
            self.add(element, priority)
        }
    }

    /// Removes the `n` elements with the smallest priorities, in order
    ///
    /// # Errors
    /// [`PqError::EmptyQueue`] if fewer than `n` elements are present. Nothing
    /// is removed in that case.
    fn remove_min_n(&mut self, n: usize) -> Result<Vec<E>, PqError> {
        if n > self.len() {
            return Err(PqError::EmptyQueue);
        }
        let mut removed = Vec::with_capacity(n);
        for _ in 0..n {
            removed.push(self.remove_min()?);
        }
        trace!(count = n, remaining = self.len(), "removed minimum elements");
        Ok(removed)
    }

    /// Builds a queue from `(element, priority)` pairs
    ///
    /// Equivalent to calling [`add`](MinPq::add) for each pair in iteration
    /// order.
    ///
    /// # Errors
    /// The first error returned by `add`, e.g. [`PqError::DuplicateElement`].
    fn from_priorities<I>(pairs: I) -> Result<Self, PqError>
    where
        Self: Sized,
        I: IntoIterator<Item = (E, f64)>,
    {
        let mut queue = Self::new();
        for (element, priority) in pairs {
            queue.add(element, priority)?;
        }
        trace!(len = queue.len(), "built priority queue from pairs");
        Ok(queue)
    }
}
