use std::ops::Range;

use crate::data::Selectable;
use crate::sort::insertion_sort;

/// Moves the `k` smallest elements to `0..k` with a single scan, keeping the
/// indices of the best candidates seen so far. *O*(*n* *k*).
pub fn naive_select<D: Selectable + ?Sized>(data: &mut D, k: usize) -> Range<usize> {
    let n = data.len();
    if k >= n {
        return 0..n;
    }
    if k == 0 {
        return 0..0;
    }

    // The largest candidate is always kept in the last slot.
    let mut smallest: Vec<usize> = (0..k).collect();
    move_largest_last(&*data, &mut smallest);
    for i in k..n {
        if data.less(i, smallest[k - 1]) {
            smallest[k - 1] = i;
            move_largest_last(&*data, &mut smallest);
        }
    }

    // Exchanging in ascending index order never disturbs a chosen element
    // that has yet to be moved.
    insertion_sort(&mut smallest[..], 0, k);
    for (i, &index) in smallest.iter().enumerate() {
        data.swap(i, index);
    }
    0..k
}

fn move_largest_last<D: Selectable + ?Sized>(data: &D, indices: &mut [usize]) {
    let mut largest = 0;
    for i in 1..indices.len() {
        if data.less(indices[largest], indices[i]) {
            largest = i;
        }
    }
    let last = indices.len() - 1;
    indices.swap(largest, last);
}
