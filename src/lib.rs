//! Fast in-place selection of the k smallest elements, compatible with stable Rust.
//!
//! Selection rearranges a collection so that a contiguous range holds the k
//! smallest elements, without sorting the whole thing. Depending on the shape
//! of the request one of three algorithms is used: a linear scan for tiny
//! inputs, a bounded heap when k is a small fraction of the input, and a
//! pattern-defeating quickselect (expected *O*(*n*), *O*(*n* log *n*) worst case)
//! otherwise.
//!
//! Anything that can report its length, compare two positions and swap two
//! positions can be selected over; see [`Selectable`].
//!
//! ```
//! let mut v = [50, 20, 30, 25, 45, 2, 6, 10, 3, 4, 5];
//! let range = quickerselect::select_slice(&mut v, 5).unwrap();
//! let mut smallest = v[range].to_vec();
//! smallest.sort();
//! assert_eq!(smallest, [2, 3, 4, 5, 6]);
//! ```

mod config;
mod data;
mod error;
#[cfg(feature = "float")]
mod float;
mod heap;
mod naive;
mod pivot;
mod partition;
mod quickselect;
mod select;
mod sort;
mod sortedness;

pub use crate::config::{SelectConfig, Strategy};
pub use crate::data::{Reverse, Selectable, SliceBy};
pub use crate::error::{Result, SelectError};
#[cfg(feature = "float")]
pub use crate::float::{select_floats, FloatSlice};
pub use crate::select::{select, select_by, select_largest, select_slice, select_using, select_with};
pub use crate::sortedness::sortedness;
