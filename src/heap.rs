use std::cmp::min;
use std::ops::Range;

use log::trace;

use crate::data::{Mirror, Selectable};
use crate::sortedness::sortedness;

/// Number of children per heap node.
const ARITY: usize = 4;

/// Sifts the element at `node` down a max-heap stored in `base..base + len`.
///
/// `node` is relative to `base`.
pub fn sift_down<D: Selectable + ?Sized>(data: &mut D, base: usize, len: usize, mut node: usize) {
    loop {
        let first = ARITY * node + 1;
        if first >= len {
            return;
        }
        let mut largest = first;
        for child in first + 1..min(first + ARITY, len) {
            if data.less(base + largest, base + child) {
                largest = child;
            }
        }
        if !data.less(base + node, base + largest) {
            return;
        }
        data.swap(base + node, base + largest);
        node = largest;
    }
}

/// Rearranges `base..base + len` into a max-heap.
pub fn heapify<D: Selectable + ?Sized>(data: &mut D, base: usize, len: usize) {
    if len < 2 {
        return;
    }
    let mut node = (len - 2) / ARITY + 1;
    while node > 0 {
        node -= 1;
        sift_down(data, base, len, node);
    }
}

/// Keeps the `k` smallest elements seen so far in a max-heap over `0..k`.
fn bounded_heap<D: Selectable + ?Sized>(data: &mut D, k: usize) {
    heapify(data, 0, k);
    for i in k..data.len() {
        if data.less(i, 0) {
            data.swap(i, 0);
            sift_down(data, 0, k, 0);
        }
    }
}

/// Moves the `k` smallest elements to `0..k` in *O*(*n* log *k*).
///
/// Descending inputs are scanned back to front, with the heap anchored at the
/// tail, so that the elements already in place rarely enter the heap.
pub fn heap_select<D: Selectable + ?Sized>(data: &mut D, k: usize) -> Range<usize> {
    let n = data.len();
    if k >= n {
        return 0..n;
    }
    if k == 0 {
        return 0..0;
    }

    if sortedness(&*data) < 0.0 {
        trace!("descending input, anchoring the heap at the tail");
        bounded_heap(&mut Mirror::new(&mut *data), k);
        let tail = n - k;
        for i in 0..k {
            data.swap(i, tail + i);
        }
    } else {
        bounded_heap(data, k);
    }
    0..k
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    // Pops every element off a heap over `0..len`, largest first.
    fn drain<D: Selectable + ?Sized>(data: &mut D, len: usize) {
        let mut end = len;
        while end > 1 {
            end -= 1;
            data.swap(0, end);
            sift_down(data, 0, end, 0);
        }
    }

    fn is_heap(v: &[i32]) -> bool {
        (1..v.len()).all(|i| v[(i - 1) / ARITY] >= v[i])
    }

    #[test]
    fn test_heapify_builds_max_heap() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 0..70 {
            let mut v: Vec<i32> = (0..len).map(|_| rng.gen_range(0..20)).collect();
            heapify(&mut v[..], 0, len);
            assert!(is_heap(&v), "{:?}", v);
        }
    }

    #[test]
    fn test_heap_pops_in_order() {
        let mut rng = StdRng::seed_from_u64(8);
        for len in 0..70 {
            let mut v: Vec<i32> = (0..len).map(|_| rng.gen_range(0..256)).collect();
            let mut expected = v.clone();
            expected.sort();
            heapify(&mut v[..], 0, len);
            drain(&mut v[..], len);
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn test_mirrored_heap_pops_in_order() {
        for input in &[vec![0], vec![2, 1], vec![1, 2, 0], vec![3, 2, 0, 1], vec![5, 1, 4, 1, 3, 9, 2]] {
            let mut v = input.clone();
            let len = v.len();
            {
                let mut mirror = Mirror::new(&mut v[..]);
                heapify(&mut mirror, 0, len);
                drain(&mut mirror, len);
            }
            let mut expected = input.clone();
            expected.sort();
            expected.reverse();
            assert_eq!(v, expected);
        }
    }

    #[test]
    fn test_heap_select_fixtures() {
        let fixtures: Vec<(Vec<i32>, Vec<i32>)> = vec![
            (vec![1, 1, 1, 1, 1], vec![1, 1, 1, 1]),
            (vec![0, 14, 16, 29, 12, 2, 4, 4, 7, 29], vec![0, 2, 4, 4]),
            (vec![9, 3, 2, 18], vec![2, 3, 9, 18]),
            (vec![16, 29, -11, 25, 28, -14, 10, 4, 7, -27], vec![-27, -14, -11, 4]),
            (vec![10, 25, 15, 35, 26, 40, 55], vec![10, 15, 25, 26]),
            (vec![2, 10, 5, 3, 2, 6, 2, 6, 10, 3, 4, 5], vec![2, 2, 2, 3]),
            (vec![10, 10, 6, 6, 5, 5, 4, 3, 3, 2, 2, 2], vec![2, 2, 2, 3]),
        ];
        for (mut v, expected) in fixtures {
            let range = heap_select(&mut v[..], 4);
            assert_eq!(range, 0..4);
            let mut selected = v[range].to_vec();
            selected.sort();
            assert_eq!(selected, expected);
        }
    }

    #[test]
    fn test_heap_select_descending_and_ascending_agree() {
        let descending: Vec<i32> = (0..5000).rev().collect();
        let ascending: Vec<i32> = (0..5000).collect();
        for mut v in vec![descending, ascending] {
            let range = heap_select(&mut v[..], 7);
            let mut selected = v[range].to_vec();
            selected.sort();
            assert_eq!(selected, (0..7).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_heap_select_overlapping_tail() {
        // k > n / 2, so the tail block overlaps the front when moved.
        let mut v = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
        let range = heap_select(&mut v[..], 6);
        let mut selected = v[range].to_vec();
        selected.sort();
        assert_eq!(selected, [1, 2, 3, 4, 5, 6]);
    }
}
