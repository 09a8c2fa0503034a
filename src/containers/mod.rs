//! Flat container types.
//!
//! - **`DynVec<T>`** - contiguous dynamic array with realloc growth

mod dyn_vec;

pub use dyn_vec::{DynVec, DEFAULT_CAPACITY};
