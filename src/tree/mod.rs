//! Ordered containers.
//!
//! - **`RbTree<T, C>`** - arena-backed red-black tree keyed by an injected
//!   3-way comparator

mod rb_tree;

pub use rb_tree::RbTree;
