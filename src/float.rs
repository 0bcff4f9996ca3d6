use std::ops::Range;

use num_traits::Float;

use crate::data::Selectable;
use crate::error::Result;
use crate::select::select;

/// A slice of floating point numbers in ascending order.
///
/// The ordering used is `-inf < ... < -0 == +0 < ... < +inf < NaN`. All NaNs
/// are equal to each other, which keeps the order a total preorder and lets
/// NaNs be selected last.
pub struct FloatSlice<'a, F: 'a>(pub &'a mut [F]);

impl<'a, F: Float> Selectable for FloatSlice<'a, F> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        let (x, y) = (self.0[i], self.0[j]);
        if x.is_nan() {
            false
        } else if y.is_nan() {
            true
        } else {
            x < y
        }
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

/// Moves the `k` smallest floating point numbers of `v` to the front.
///
/// NaNs are treated as greater than every number.
pub fn select_floats<F: Float>(v: &mut [F], k: usize) -> Result<Range<usize>> {
    select(&mut FloatSlice(v), k)
}
