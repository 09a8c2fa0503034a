//! Ordering capability injected into the ordered containers.
//!
//! The containers in this crate are parameterized by a [`Comparator`] rather
//! than a plain less-than relation. The 3-way result matters: duplicate
//! rejection in [`RbTree`](crate::RbTree) and the predecessor/successor
//! queries depend on distinguishing `Equal` from `Less`/`Greater`, so the
//! contract is stated in terms of a strict total order.

use std::cmp::Ordering;

/// A pure 3-way comparison over `T`.
///
/// Implementations must define a total order that stays consistent for the
/// lifetime of any container using them: `compare(a, b) == Equal` exactly when
/// the two values are interchangeable for ordering purposes, and
/// `compare(a, b)` is always the inverse of `compare(b, a)`.
///
/// Any `Fn(&T, &T) -> Ordering` closure is a `Comparator`, so ad-hoc orders
/// do not need a named type:
///
/// ```rust
/// use datakit::{Comparator, RbTree};
/// use std::cmp::Ordering;
///
/// let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
/// assert_eq!(by_abs.compare(&-3, &2), Ordering::Greater);
///
/// let mut tree = RbTree::with_comparator(by_abs);
/// assert!(tree.insert(-3));
/// assert!(!tree.insert(3)); // equal under the injected order
/// ```
pub trait Comparator<T> {
    /// Compare `a` against `b`, returning their relative order.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural order of `T: Ord`. Default comparator for every container.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// The inverse of the natural order. Turns the min-heap
/// [`PriorityQueue`](crate::PriorityQueue) into a max-heap.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Reverse;

impl<T: Ord> Comparator<T> for Reverse {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(Natural.compare(&1, &2), Ordering::Less);
        assert_eq!(Natural.compare(&2, &2), Ordering::Equal);
        assert_eq!(Natural.compare(&3, &2), Ordering::Greater);
    }

    #[test]
    fn test_reverse_order() {
        assert_eq!(Reverse.compare(&1, &2), Ordering::Greater);
        assert_eq!(Reverse.compare(&2, &2), Ordering::Equal);
        assert_eq!(Reverse.compare(&3, &2), Ordering::Less);
    }

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"xyz"), Ordering::Less);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
    }

    #[test]
    fn test_reverse_is_inverse_of_natural() {
        for (a, b) in [(1, 2), (2, 2), (9, 4)] {
            assert_eq!(Natural.compare(&a, &b), Reverse.compare(&b, &a));
        }
    }
}
