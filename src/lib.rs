//! Indexed Min-Priority Queues for Rust
//!
//! This crate provides priority queues of unique elements whose priorities can
//! be changed after insertion, as needed by frequency counting and
//! shortest-path relaxation.
//!
//! # Implementations
//!
//! - **Optimized Heap**: binary min-heap plus an element index; O(log n) add, remove-min and
//!   change-priority, O(1) contains, get-priority and peek
//! - **Unsorted Array**: linear scans everywhere; a simple reference implementation
//!
//! Both implement the [`MinPq`] trait, so code written against the trait (such as
//! [`tag_ranking`]) can run on either.
//!
//! # Example
//!
//! ```rust
//! use minpq::optimized_heap::OptimizedHeapMinPq;
//! use minpq::{MinPq, PqError};
//!
//! let mut pq = OptimizedHeapMinPq::new();
//! pq.add("A", 5.0).unwrap();
//! pq.add("B", 3.0).unwrap();
//! pq.add("C", 8.0).unwrap();
//!
//! pq.change_priority(&"A", 1.0).unwrap();
//! assert_eq!(pq.peek_min(), Ok(&"A"));
//! assert_eq!(pq.add("A", 2.0), Err(PqError::DuplicateElement));
//! ```

pub mod node;
pub mod optimized_heap;
pub mod shortest_paths;
pub mod tag_ranking;
pub mod traits;
pub mod unsorted;

// Re-export the main trait for convenience
pub use node::PriorityNode;
pub use traits::{MinPq, PqError};
