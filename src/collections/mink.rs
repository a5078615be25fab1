//! Module that provides bounded selection of the smallest items.

use std::collections::BinaryHeap;

/// Selects the `k` smallest items of an iterator.
pub trait MinK: Iterator {
    /// Consumes the iterator and returns its `k` smallest items in ascending
    /// order.
    ///
    /// Only `k` items are held at a time. If the iterator yields fewer than
    /// `k` items, all of them are returned.
    fn min_k(self, k: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord;
}

impl<I: Iterator> MinK for I {
    fn min_k(self, k: usize) -> Vec<Self::Item>
    where
        Self::Item: Ord,
    {
        if k == 0 {
            return vec![];
        }

        // Max-heap, so the top is the worst of the current best k.
        let mut heap = BinaryHeap::with_capacity(k);

        for item in self {
            if heap.len() < k {
                heap.push(item);
            } else if let Some(mut top) = heap.peek_mut() {
                if item < *top {
                    *top = item;
                }
            }
        }

        heap.into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smallest() {
        let v = vec![5, 1, 9, 3, 7, 2, 8];
        assert_eq!(v.into_iter().min_k(3), vec![1, 2, 3]);
    }

    #[test]
    fn k_larger_than_input() {
        let v = vec![4, 2, 3];
        assert_eq!(v.into_iter().min_k(10), vec![2, 3, 4]);
    }

    #[test]
    fn zero() {
        assert!((0..10).min_k(0).is_empty());
    }

    #[test]
    fn empty() {
        assert!(std::iter::empty::<u8>().min_k(4).is_empty());
    }

    #[test]
    fn duplicates() {
        let v = vec![2, 1, 2, 1, 2, 1];
        assert_eq!(v.into_iter().min_k(4), vec![1, 1, 1, 2]);
    }

    #[test]
    fn matches_full_sort() {
        let v = (0..200u64).map(|i| (i * 7919) % 101).collect::<Vec<_>>();
        let mut sorted = v.clone();
        sorted.sort();
        for k in [1, 5, 50, 101, 200] {
            assert_eq!(v.iter().copied().min_k(k), sorted[..k]);
        }
    }
}
