use std::cmp::Ordering;
use std::ops::Range;

use log::debug;

use crate::config::{SelectConfig, Strategy};
use crate::data::{Reverse, Selectable, SliceBy};
use crate::error::{Result, SelectError};
use crate::heap::heap_select;
use crate::naive::naive_select;
use crate::quickselect::quickselect;

/// Rearranges `data` so that the returned range holds its `k` smallest elements.
///
/// The order inside the range is unspecified, and so is the order of the
/// remaining elements. Fails with [`SelectError::OutOfRange`] unless
/// `1 <= k <= data.len()`, in which case `data` is left untouched.
pub fn select<D: Selectable + ?Sized>(data: &mut D, k: usize) -> Result<Range<usize>> {
    select_with(data, k, &SelectConfig::default())
}

/// Like [`select`], with the strategy thresholds taken from `config`.
pub fn select_with<D: Selectable + ?Sized>(data: &mut D, k: usize, config: &SelectConfig) -> Result<Range<usize>> {
    let len = check_range(&*data, k)?;
    if k == len {
        return Ok(0..len);
    }
    Ok(run(data, k, config.strategy(len, k)))
}

/// Like [`select`], but always uses `strategy`.
pub fn select_using<D: Selectable + ?Sized>(data: &mut D, k: usize, strategy: Strategy) -> Result<Range<usize>> {
    let len = check_range(&*data, k)?;
    if k == len {
        return Ok(0..len);
    }
    Ok(run(data, k, strategy))
}

/// Moves the `k` smallest elements of `v` to the front.
pub fn select_slice<T: Ord>(v: &mut [T], k: usize) -> Result<Range<usize>> {
    select(v, k)
}

/// Moves the `k` smallest elements of `v`, according to `compare`, to the front.
pub fn select_by<T, C: Fn(&T, &T) -> Ordering>(v: &mut [T], k: usize, compare: &C) -> Result<Range<usize>> {
    select(&mut SliceBy::new(v, compare), k)
}

/// Moves the `k` largest elements of `v` to the front.
pub fn select_largest<T: Ord>(v: &mut [T], k: usize) -> Result<Range<usize>> {
    select(&mut Reverse(v), k)
}

fn check_range<D: Selectable + ?Sized>(data: &D, k: usize) -> Result<usize> {
    let len = data.len();
    if k < 1 || k > len {
        return Err(SelectError::OutOfRange { k, len });
    }
    Ok(len)
}

fn run<D: Selectable + ?Sized>(data: &mut D, k: usize, strategy: Strategy) -> Range<usize> {
    debug!("selecting {} of {} elements with {:?}", k, data.len(), strategy);
    match strategy {
        Strategy::Naive => naive_select(data, k),
        Strategy::Heap => heap_select(data, k),
        Strategy::Quickselect => quickselect(data, k),
    }
}
