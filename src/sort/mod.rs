//! Array sorting routines.
//!
//! Free functions over `&mut [T]`, sorting in place and sharing no state
//! with the containers. Each routine comes in an `Ord`-based form and a
//! `*_by` form taking a [`Comparator`]. Empty and single-element slices are
//! no-ops for every routine.
//!
//! Complexity: bubble/insertion/selection sort are O(n²) (insertion sort is
//! O(n) on nearly-sorted input), merge/heap sort are O(n log n), quick sort
//! is O(n log n) expected with its first-element pivot. Merge sort is the
//! only stable routine here and the only one that allocates.

use crate::compare::{Comparator, Natural};
use std::cmp::Ordering;

#[inline]
fn orders_before<T, C: Comparator<T>>(cmp: &C, a: &T, b: &T) -> bool {
    cmp.compare(a, b) == Ordering::Less
}

/// Bubble sort. Repeatedly sweeps adjacent pairs until a sweep makes no
/// swap.
pub fn bubble_sort<T: Ord>(data: &mut [T]) {
    bubble_sort_by(data, &Natural);
}

/// [`bubble_sort`] under an injected comparator.
pub fn bubble_sort_by<T, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    let mut unsorted = data.len();
    while unsorted > 1 {
        let mut swapped = false;
        for i in 1..unsorted {
            if orders_before(cmp, &data[i], &data[i - 1]) {
                data.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            return;
        }
        unsorted -= 1;
    }
}

/// Insertion sort. Grows a sorted prefix by sinking each element into
/// place.
pub fn insertion_sort<T: Ord>(data: &mut [T]) {
    insertion_sort_by(data, &Natural);
}

/// [`insertion_sort`] under an injected comparator.
pub fn insertion_sort_by<T, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 && orders_before(cmp, &data[j], &data[j - 1]) {
            data.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Selection sort. Repeatedly selects the minimum of the unsorted suffix.
pub fn selection_sort<T: Ord>(data: &mut [T]) {
    selection_sort_by(data, &Natural);
}

/// [`selection_sort`] under an injected comparator.
pub fn selection_sort_by<T, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    for i in 0..data.len() {
        let mut min = i;
        for j in (i + 1)..data.len() {
            if orders_before(cmp, &data[j], &data[min]) {
                min = j;
            }
        }
        if min != i {
            data.swap(i, min);
        }
    }
}

/// Merge sort. Stable; allocates a scratch buffer of the input length.
pub fn merge_sort<T: Ord + Clone>(data: &mut [T]) {
    merge_sort_by(data, &Natural);
}

/// [`merge_sort`] under an injected comparator.
pub fn merge_sort_by<T: Clone, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    if data.len() <= 1 {
        return;
    }
    let mid = data.len() / 2;
    let (left, right) = data.split_at_mut(mid);
    merge_sort_by(left, cmp);
    merge_sort_by(right, cmp);

    let mut merged = Vec::with_capacity(data.len());
    {
        let (mut i, mut j) = (0, 0);
        let (left, right) = data.split_at(mid);
        while i < left.len() && j < right.len() {
            // `<=` keeps equal elements in their original half: stability
            if orders_before(cmp, &right[j], &left[i]) {
                merged.push(right[j].clone());
                j += 1;
            } else {
                merged.push(left[i].clone());
                i += 1;
            }
        }
        merged.extend_from_slice(&left[i..]);
        merged.extend_from_slice(&right[j..]);
    }
    data.clone_from_slice(&merged);
}

/// Quick sort. In place, first-element pivot; O(n²) on adversarial input.
pub fn quick_sort<T: Ord>(data: &mut [T]) {
    quick_sort_by(data, &Natural);
}

/// [`quick_sort`] under an injected comparator.
pub fn quick_sort_by<T, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    if data.len() <= 1 {
        return;
    }

    // Partition around the first element: walk the tail, pulling anything
    // that orders before the pivot into a growing left block, then drop the
    // pivot between the blocks.
    let mut store = 0;
    for i in 1..data.len() {
        if orders_before(cmp, &data[i], &data[0]) {
            store += 1;
            data.swap(store, i);
        }
    }
    data.swap(0, store);

    let (left, rest) = data.split_at_mut(store);
    quick_sort_by(left, cmp);
    quick_sort_by(&mut rest[1..], cmp);
}

/// Heap sort. In place: builds a max-heap (under the comparator), then
/// repeatedly swaps the root behind the shrinking heap.
pub fn heap_sort<T: Ord>(data: &mut [T]) {
    heap_sort_by(data, &Natural);
}

/// [`heap_sort`] under an injected comparator.
pub fn heap_sort_by<T, C: Comparator<T>>(data: &mut [T], cmp: &C) {
    let len = data.len();
    if len <= 1 {
        return;
    }

    for i in (0..len / 2).rev() {
        sift_down(data, cmp, i, len);
    }
    for end in (1..len).rev() {
        data.swap(0, end);
        sift_down(data, cmp, 0, end);
    }
}

// Restore heap order below `index`, treating `data[..len]` as a max-heap
// with respect to `cmp`.
fn sift_down<T, C: Comparator<T>>(data: &mut [T], cmp: &C, mut index: usize, len: usize) {
    loop {
        let left = index * 2 + 1;
        if left >= len {
            return;
        }
        let right = left + 1;
        let mut largest = index;
        if orders_before(cmp, &data[largest], &data[left]) {
            largest = left;
        }
        if right < len && orders_before(cmp, &data[largest], &data[right]) {
            largest = right;
        }
        if largest == index {
            return;
        }
        data.swap(index, largest);
        index = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    type SortFn = fn(&mut [i64]);

    const SORTS: &[(&str, SortFn)] = &[
        ("bubble", bubble_sort::<i64>),
        ("insertion", insertion_sort::<i64>),
        ("selection", selection_sort::<i64>),
        ("merge", merge_sort::<i64>),
        ("quick", quick_sort::<i64>),
        ("heap", heap_sort::<i64>),
    ];

    #[test]
    fn test_empty_and_single() {
        for (name, sort) in SORTS {
            let mut empty: [i64; 0] = [];
            sort(&mut empty);

            let mut single = [42i64];
            sort(&mut single);
            assert_eq!(single, [42], "{name} broke a single-element slice");
        }
    }

    #[test]
    fn test_small_fixed_inputs() {
        let cases: &[&[i64]] = &[
            &[2, 1],
            &[3, 1, 2],
            &[5, 3, 8, 1],
            &[1, 1, 1],
            &[9, -3, 0, -3, 7, 9],
        ];
        for (name, sort) in SORTS {
            for case in cases {
                let mut data = case.to_vec();
                let mut expected = case.to_vec();
                sort(&mut data);
                expected.sort();
                assert_eq!(data, expected, "{name} failed on {case:?}");
            }
        }
    }

    #[test]
    fn test_already_sorted_and_reversed() {
        for (name, sort) in SORTS {
            let mut asc: Vec<i64> = (0..100).collect();
            sort(&mut asc);
            assert_eq!(asc, (0..100).collect::<Vec<i64>>(), "{name} on sorted");

            let mut desc: Vec<i64> = (0..100).rev().collect();
            sort(&mut desc);
            assert_eq!(desc, (0..100).collect::<Vec<i64>>(), "{name} on reversed");
        }
    }

    #[test]
    fn test_random_inputs_match_std_sort() {
        let mut rng = StdRng::seed_from_u64(0x5027);
        for (name, sort) in SORTS {
            for _ in 0..20 {
                let len = rng.gen_range(0..300);
                let mut data: Vec<i64> = (0..len).map(|_| rng.gen_range(-1000..1000)).collect();
                let mut expected = data.clone();
                sort(&mut data);
                expected.sort();
                assert_eq!(data, expected, "{name} failed on random input");
            }
        }
    }

    #[test]
    fn test_by_variants_follow_comparator() {
        let reversed = |a: &i64, b: &i64| b.cmp(a);
        let mut data = vec![1i64, 5, 3, 2, 4];
        quick_sort_by(&mut data, &reversed);
        assert_eq!(data, vec![5, 4, 3, 2, 1]);

        let mut data = vec![1i64, 5, 3, 2, 4];
        heap_sort_by(&mut data, &reversed);
        assert_eq!(data, vec![5, 4, 3, 2, 1]);

        let mut data = vec![1i64, 5, 3, 2, 4];
        merge_sort_by(&mut data, &reversed);
        assert_eq!(data, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // sort by key only; payloads of equal keys must keep insertion order
        let by_key = |a: &(i64, usize), b: &(i64, usize)| a.0.cmp(&b.0);
        let data: Vec<(i64, usize)> = vec![(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)];
        let mut sorted = data.clone();
        merge_sort_by(&mut sorted, &by_key);
        assert_eq!(sorted, vec![(1, 1), (1, 3), (2, 0), (2, 2), (2, 4)]);
    }
}
