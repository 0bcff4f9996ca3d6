use crate::data::Selectable;

/// Minimum length to take the median of three candidates.
const SHORTEST_MEDIAN: usize = 8;

/// Minimum length to refine each candidate with its neighbours first (ninther).
const SHORTEST_NINTHER: usize = 50;

/// Number of swaps a fully descending range produces in `choose_pivot`.
const MAX_SWAPS: usize = 4 * 3;

/// What pivot selection saw about the order of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Unknown,
    Increasing,
    Decreasing,
}

/// Chooses a pivot in `a..b` and guesses whether the range is monotonic.
pub fn choose_pivot<D: Selectable + ?Sized>(data: &D, a: usize, b: usize) -> (usize, Hint) {
    let len = b - a;
    let mut swaps = 0;
    let mut i = a + len / 4;
    let mut j = a + len / 4 * 2;
    let mut k = a + len / 4 * 3;

    if len >= SHORTEST_MEDIAN {
        if len >= SHORTEST_NINTHER {
            i = median_adjacent(data, i, &mut swaps);
            j = median_adjacent(data, j, &mut swaps);
            k = median_adjacent(data, k, &mut swaps);
        }
        j = median(data, i, j, k, &mut swaps);
    }

    let hint = match swaps {
        0 => Hint::Increasing,
        MAX_SWAPS => Hint::Decreasing,
        _ => Hint::Unknown,
    };
    (j, hint)
}

#[inline(always)]
fn order2<D: Selectable + ?Sized>(data: &D, a: usize, b: usize, swaps: &mut usize) -> (usize, usize) {
    if data.less(b, a) {
        *swaps += 1;
        (b, a)
    } else {
        (a, b)
    }
}

fn median<D: Selectable + ?Sized>(data: &D, a: usize, b: usize, c: usize, swaps: &mut usize) -> usize {
    let (a, b) = order2(data, a, b, swaps);
    let (b, _) = order2(data, b, c, swaps);
    let (_, b) = order2(data, a, b, swaps);
    b
}

fn median_adjacent<D: Selectable + ?Sized>(data: &D, a: usize, swaps: &mut usize) -> usize {
    median(data, a - 1, a, a + 1, swaps)
}
