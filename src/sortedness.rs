use std::cmp::{max, min};

use crate::data::Selectable;

/// Margin of error of the sampled estimate.
const MARGIN_OF_ERROR: f64 = 0.05;

/// Estimates how sorted `data` already is, and in which direction.
///
/// The result lies in `[-1, 1]`: positive values mean the data leans towards
/// ascending order, negative values towards descending order, and values close
/// to zero mean no clear order. Adjacent pairs are sampled at a fixed stride, so
/// the estimate can be fooled by periodic data. Never rely on it for anything
/// but picking a faster path.
///
/// ```
/// use quickerselect::sortedness;
///
/// let ascending: Vec<u32> = (0..1000).collect();
/// assert_eq!(sortedness(&ascending[..]), 1.0);
/// let descending: Vec<u32> = (0..1000).rev().collect();
/// assert_eq!(sortedness(&descending[..]), -1.0);
/// ```
pub fn sortedness<D: Selectable + ?Sized>(data: &D) -> f64 {
    let len = data.len();
    match len {
        0 | 1 => return 1.0,
        2 => {
            return if data.less(0, 1) {
                1.0
            } else if data.less(1, 0) {
                -1.0
            } else {
                0.0
            };
        }
        _ => {}
    }

    let stride = max(1, len / sample_size(len, MARGIN_OF_ERROR));
    let mut ordered = 0i64;
    let mut inverted = 0i64;
    let mut pairs = 0i64;

    let mut i = 0;
    while i + 1 < len {
        if data.less(i, i + 1) {
            ordered += 1;
        } else if data.less(i + 1, i) {
            inverted += 1;
        }
        pairs += 1;
        i += stride;
    }

    (ordered - inverted) as f64 / pairs as f64
}

/// Sample size for a population by Yamane's formula, `n / (1 + n * e^2)`.
///
/// E.g. `(10, 0.05) -> 10`, `(100, 0.05) -> 80`, `(10000, 0.05) -> 385`.
fn sample_size(population: usize, margin_of_error: f64) -> usize {
    let n = population as f64;
    let size = n / (1.0 + n * margin_of_error * margin_of_error);
    min(size.ceil() as usize, population)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_size() {
        assert_eq!(sample_size(10, 0.05), 10);
        assert_eq!(sample_size(50, 0.05), 45);
        assert_eq!(sample_size(100, 0.05), 80);
        assert_eq!(sample_size(10_000, 0.05), 385);
        assert_eq!(sample_size(10_000_000, 0.05), 400);
    }

    #[test]
    fn test_tiny_inputs() {
        let empty: [i32; 0] = [];
        assert_eq!(sortedness(&empty[..]), 1.0);
        assert_eq!(sortedness(&[5][..]), 1.0);
        assert_eq!(sortedness(&[1, 2][..]), 1.0);
        assert_eq!(sortedness(&[2, 1][..]), -1.0);
        assert_eq!(sortedness(&[2, 2][..]), 0.0);
    }

    #[test]
    fn test_monotonic_inputs() {
        let ascending: Vec<i32> = (0..10_000).collect();
        let descending: Vec<i32> = (0..10_000).rev().collect();
        assert_eq!(sortedness(&ascending[..]), 1.0);
        assert_eq!(sortedness(&descending[..]), -1.0);
    }

    #[test]
    fn test_all_equal_is_neutral() {
        let v = vec![3; 500];
        assert_eq!(sortedness(&v[..]), 0.0);
    }

    #[test]
    fn test_score_is_bounded() {
        let zigzag: Vec<i32> = (0..997).map(|i| if i % 2 == 0 { i } else { -i }).collect();
        let s = sortedness(&zigzag[..]);
        assert!(s >= -1.0 && s <= 1.0, "{}", s);

        let mostly_descending: Vec<i32> = (0..1000).map(|i| if i % 10 == 0 { i } else { -i }).collect();
        assert!(sortedness(&mostly_descending[..]) < 0.0);
    }
}
