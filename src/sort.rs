use crate::data::Selectable;
use crate::heap::{heapify, sift_down};

/// Maximum number of adjacent out-of-order pairs that will get shifted.
const MAX_SHIFT_STEPS: usize = 5;

/// Ranges shorter than this are never shifted by `partial_insertion_sort`.
const SHORTEST_SHIFTING: usize = 50;

/// Sorts `a..b` using insertion sort, which is *O*(*n*^2) worst-case.
pub fn insertion_sort<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize) {
    let mut i = a + 1;
    while i < b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
        i += 1;
    }
}

/// Partially sorts `a..b` by shifting a few out-of-order elements around.
///
/// Returns `true` if the range is sorted at the end. This is *O*(*n*) worst-case.
#[cold]
pub fn partial_insertion_sort<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize) -> bool {
    let mut i = a + 1;
    for _ in 0..MAX_SHIFT_STEPS {
        while i < b && !data.less(i, i - 1) {
            i += 1;
        }

        if i >= b {
            return true;
        }

        if b - a < SHORTEST_SHIFTING {
            return false;
        }

        data.swap(i, i - 1);

        // Shift the smaller element to the left.
        let mut j = i - 1;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }

        // Shift the greater element to the right.
        let mut j = i + 1;
        while j < b && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j += 1;
        }
    }
    false
}

/// Sorts `a..b` using a 4-ary heap, which guarantees *O*(*n* log *n*) worst-case.
#[cold]
#[inline(never)]
pub fn heapsort<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize) {
    let len = b - a;
    heapify(data, a, len);
    let mut end = len;
    while end > 1 {
        end -= 1;
        data.swap(a, a + end);
        sift_down(data, a, end, 0);
    }
}

pub fn reverse_range<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize) {
    if b <= a {
        return;
    }
    let mut i = a;
    let mut j = b - 1;
    while i < j {
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
}
