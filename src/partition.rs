use crate::data::Selectable;

/// Partitions `a..b` around the element at `pivot` (Hoare scheme).
///
/// Returns the final position `mid` of the pivot, with `a..mid` less than the
/// pivot and `mid + 1..b` not less than it, and whether the range was already
/// partitioned (no element had to move besides the pivot).
pub fn partition<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize, pivot: usize) -> (usize, bool) {
    data.swap(a, pivot);
    // `i..=j` is the part still to be partitioned.
    let mut i = a + 1;
    let mut j = b - 1;

    while i <= j && data.less(i, a) {
        i += 1;
    }
    while i <= j && !data.less(j, a) {
        j -= 1;
    }
    if i > j {
        data.swap(j, a);
        return (j, true);
    }
    data.swap(i, j);
    i += 1;
    j -= 1;

    loop {
        while i <= j && data.less(i, a) {
            i += 1;
        }
        while i <= j && !data.less(j, a) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    data.swap(j, a);
    (j, false)
}

/// Partitions `a..b` into elements equal to the element at `pivot`, followed by
/// greater elements. No element of the range may be less than the pivot.
///
/// Returns the end of the run of equal elements.
pub fn partition_equal<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize, pivot: usize) -> usize {
    data.swap(a, pivot);
    let mut i = a + 1;
    let mut j = b - 1;
    loop {
        while i <= j && !data.less(a, i) {
            i += 1;
        }
        while i <= j && data.less(a, j) {
            j -= 1;
        }
        if i > j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    i
}

// Three-way partition scheme: (lt, gt)
//
// [LLL][EEE][GGG]
// ^    ^    ^   ^
// |    lt   gt  |
// a             b
//
//   lt: index of the first element that is not < the pivot
//   gt: index of the first element that is > the pivot
pub fn partition_three_way<D: Selectable + ?Sized>(data: &mut D, a: usize, b: usize, pivot: usize) -> (usize, usize) {
    data.swap(a, pivot);
    let mut less = a + 1;
    let mut equal = a + 1;
    let mut greater = b;
    while equal < greater && data.less(a, greater - 1) {
        greater -= 1;
    }
    while equal < greater {
        if data.less(equal, a) {
            data.swap(equal, less);
            less += 1;
            equal += 1;
        } else if data.less(a, equal) {
            greater -= 1;
            data.swap(equal, greater);
            while equal < greater && data.less(a, greater - 1) {
                greater -= 1;
            }
        } else {
            equal += 1;
        }
    }
    // Move the pivot in front of the equal run.
    less -= 1;
    data.swap(a, less);
    (less, greater)
}
