//! # Datakit: In-Memory Data-Structure Toolkit
//!
//! This crate provides a small toolkit of classic in-memory data structures
//! built around injected ordering and hashing capabilities.
//!
//! ## Components
//!
//! - **`DynVec<T>`** - contiguous dynamic array with amortized O(1) append
//! - **`RbTree<T, C>`** - red-black tree: O(log n) insert, remove, search,
//!   predecessor, and successor under a 3-way comparator
//! - **`HashTable<K, V, C, S>`** - bucketed hash map with red-black-tree
//!   buckets and amortized O(1) operations via doubling + rehash
//! - **`PriorityQueue<T, C>`** - binary heap over `DynVec`, a min-heap under
//!   the default comparator
//! - **`sort`** - in-place slice sorting routines (bubble, insertion,
//!   selection, merge, quick, heap)
//! - **`geometry`** - self-contained 2D primitives with tolerance-based
//!   comparison
//!
//! All containers are single-threaded values with exclusive ownership of
//! their internals; there is no interior synchronization. Expected negative
//! outcomes (duplicate insert, missing key, empty pop) come back as `bool`
//! or `Option`, never as errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use datakit::{DynVec, HashTable, PriorityQueue, RbTree};
//!
//! // Ordered container
//! let mut tree = RbTree::new();
//! tree.insert(3);
//! tree.insert(1);
//! assert_eq!(tree.min(), Some(&1));
//!
//! // Hash map with tree buckets
//! let mut table = HashTable::new();
//! table.insert("answer", 42);
//! assert_eq!(table.get(&"answer"), Some(&42));
//!
//! // Min-heap
//! let mut queue = PriorityQueue::new();
//! queue.push(5).unwrap();
//! queue.push(2).unwrap();
//! assert_eq!(queue.pop(), Some(2));
//!
//! // Dynamic array
//! let mut vec = DynVec::new();
//! vec.push(7).unwrap();
//! assert!(vec.contains(&7));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod compare;
pub mod containers;
pub mod error;
pub mod geometry;
pub mod hash_table;
pub mod heap;
pub mod sort;
pub mod tree;

// Re-export core types
pub use compare::{Comparator, Natural, Reverse};
pub use containers::DynVec;
pub use error::{DatakitError, Result};
pub use hash_table::{HashTable, HashTableConfig};
pub use heap::PriorityQueue;
pub use tree::RbTree;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing datakit v{}", VERSION);
}
