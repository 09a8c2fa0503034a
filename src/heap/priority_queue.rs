//! PriorityQueue: a binary heap layered over [`DynVec`].
//!
//! The heap owns its backing array and never exposes it. For every index `i`
//! with children at `2i + 1` and `2i + 2`, the parent never orders strictly
//! after a child under the injected comparator; with the default [`Natural`]
//! order that makes a min-heap popping in ascending order. Ties between
//! equal-priority elements pop in an unspecified order relative to insertion.

use crate::compare::{Comparator, Natural};
use crate::containers::DynVec;
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;

/// A binary heap keyed by a [`Comparator`].
///
/// # Examples
///
/// ```rust
/// use datakit::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// for v in [5, 3, 8, 1] {
///     queue.push(v).unwrap();
/// }
/// assert_eq!(queue.pop(), Some(1));
/// assert_eq!(queue.pop(), Some(3));
/// assert_eq!(queue.pop(), Some(5));
/// assert_eq!(queue.pop(), Some(8));
/// assert_eq!(queue.pop(), None);
/// ```
pub struct PriorityQueue<T, C: Comparator<T> = Natural> {
    data: DynVec<T>,
    cmp: C,
}

impl<T: Ord> PriorityQueue<T, Natural> {
    /// Create an empty min-heap over `T`'s natural order.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T: Ord> Default for PriorityQueue<T, Natural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Create an empty queue ordered by `cmp`. The element `cmp` orders
    /// first pops first.
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            data: DynVec::new(),
            cmp,
        }
    }

    /// Create an empty queue with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Result<Self> {
        Ok(Self {
            data: DynVec::with_capacity(capacity)?,
            cmp,
        })
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The element that would pop next, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.get(0)
    }

    /// Add an element to the queue.
    pub fn push(&mut self, value: T) -> Result<()> {
        self.data.push(value)?;
        let last = self.data.len() - 1;
        self.sift_up(last);
        Ok(())
    }

    /// Remove and return the front element, or `None` if the queue is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.data.len() <= 1 {
            return self.data.pop();
        }
        let last = self.data.len() - 1;
        self.data.as_mut_slice().swap(0, last);
        let front = self.data.pop();
        self.sift_down(0);
        front
    }

    // Walk the element at `index` toward the root while it orders strictly
    // before its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            let data = self.data.as_mut_slice();
            if self.cmp.compare(&data[index], &data[parent]) == Ordering::Less {
                data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    // Walk the element at `index` toward the leaves, swapping with the
    // first-ordering child while heap order is violated.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = index * 2 + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let data = self.data.as_mut_slice();
            let best = if right < len
                && self.cmp.compare(&data[right], &data[left]) == Ordering::Less
            {
                right
            } else {
                left
            };
            if self.cmp.compare(&data[best], &data[index]) == Ordering::Less {
                data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.as_slice()).finish()
    }
}
