use std::cmp::min;
use std::ops::Range;

use log::trace;

use crate::data::Selectable;
use crate::partition::{partition, partition_equal, partition_three_way};
use crate::pivot::{choose_pivot, Hint};
use crate::sort::{heapsort, insertion_sort, partial_insertion_sort, reverse_range};

/// Ranges of up to this many elements are finished with insertion sort.
const MAX_INSERTION: usize = 12;

/// Moves the `k` smallest elements to `0..k` using pattern-defeating
/// quickselect: expected *O*(*n*), *O*(*n* log *n*) worst-case.
pub fn quickselect<D: Selectable + ?Sized>(data: &mut D, k: usize) -> Range<usize> {
    let n = data.len();
    if k >= n {
        return 0..n;
    }
    // Number of imbalanced partitions allowed before switching to heapsort.
    let limit = usize::BITS - n.leading_zeros();
    select_boundary(data, 0, n, k, limit);
    0..k
}

/// Rearranges `a..b` until every element left of `k` is not greater than any
/// element right of it.
///
/// Everything in `a..b` must already be not less than `a - 1` (if any) and not
/// greater than `b` (if any).
fn select_boundary<D: Selectable + ?Sized>(data: &mut D, mut a: usize, mut b: usize, k: usize, mut limit: u32) {
    // True if the last partitioning was reasonably balanced.
    let mut was_balanced = true;
    // True if the last partitioning didn't move elements.
    let mut was_partitioned = true;

    loop {
        if k <= a || k >= b {
            return;
        }
        let len = b - a;

        if len <= MAX_INSERTION {
            insertion_sort(data, a, b);
            return;
        }

        if limit == 0 {
            trace!("too many imbalanced partitions, heapsorting {} elements", len);
            heapsort(data, a, b);
            return;
        }

        if !was_balanced {
            break_patterns(data, a, b);
            limit -= 1;
        }

        let (mut pivot, mut hint) = choose_pivot(&*data, a, b);
        if hint == Hint::Decreasing {
            reverse_range(data, a, b);
            pivot = (b - 1) - (pivot - a);
            hint = Hint::Increasing;
        }

        if was_balanced && was_partitioned && hint == Hint::Increasing && partial_insertion_sort(data, a, b) {
            return;
        }

        // A pivot equal to the element right before the range is the minimum of
        // the range. Skip the whole run of elements equal to it at once.
        if a > 0 && !data.less(a - 1, pivot) {
            let mid = partition_equal(data, a, b, pivot);
            a = mid;
            continue;
        }

        if !was_balanced {
            let (lt, gt) = partition_three_way(data, a, b, pivot);
            if lt <= k && k <= gt {
                return;
            }
            was_balanced = min(lt - a, b - gt) >= len / 8;
            was_partitioned = false;
            if k < lt {
                b = lt;
            } else {
                a = gt;
            }
            continue;
        }

        let (mid, was_p) = partition(data, a, b, pivot);
        was_balanced = min(mid - a, b - mid) >= len / 8;
        was_partitioned = was_p;

        if k == mid {
            return;
        } else if k < mid {
            b = mid;
        } else {
            a = mid + 1;
        }
    }
}

/// Scatters some elements around the pivot candidates of `a..b` in an attempt
/// to break patterns that cause imbalanced partitions.
#[cold]
fn break_patterns<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize) {
    let len = b - a;
    if len < 8 {
        return;
    }
    // Xorshift RNG, seeded with the length so that selection stays deterministic.
    let mut random = len as u32;
    let mut next = || {
        random ^= random << 13;
        random ^= random >> 17;
        random ^= random << 5;
        random as usize
    };

    let modulus = len.next_power_of_two();
    let pos = a + len / 4 * 2;
    for i in 0..3 {
        let mut other = next() & (modulus - 1);
        if other >= len {
            other -= len;
        }
        data.swap(pos - 1 + i, a + other);
    }
}
