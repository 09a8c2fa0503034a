//! Priority queues.
//!
//! - **`PriorityQueue<T, C>`** - binary heap over a [`DynVec`](crate::DynVec),
//!   min-heap under the default comparator

mod priority_queue;

pub use priority_queue::PriorityQueue;
