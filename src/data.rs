use std::cmp::Ordering;
use std::cmp::Ordering::*;

/// A collection whose elements can be selected over.
///
/// The selection algorithms never move an element out of the collection; all
/// they do is compare and exchange positions. `less` has to describe a total
/// preorder over `0..len()` (ties are fine). If it does not, the outcome of a
/// selection is unspecified, but it stays memory safe.
pub trait Selectable {
    /// The number of elements in the collection.
    fn len(&self) -> usize;

    /// Reports whether the element at `i` must come before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    /// Exchanges the elements at `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Selectable for [T] {
    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self[i] < self[j]
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<'a, D: Selectable + ?Sized> Selectable for &'a mut D {
    #[inline(always)]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

/// A slice ordered by a caller supplied comparison.
pub struct SliceBy<'a, T: 'a, C> {
    v: &'a mut [T],
    compare: C,
}

impl<'a, T: 'a, C: Fn(&T, &T) -> Ordering> SliceBy<'a, T, C> {
    pub fn new(v: &'a mut [T], compare: C) -> SliceBy<'a, T, C> {
        SliceBy { v, compare }
    }
}

impl<'a, T: 'a, C: Fn(&T, &T) -> Ordering> Selectable for SliceBy<'a, T, C> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.v.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        (self.compare)(&self.v[i], &self.v[j]) == Less
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.v.swap(i, j)
    }
}

/// Inverts the order of the wrapped collection.
///
/// Selecting the k smallest elements of `Reverse(data)` selects the k largest
/// elements of `data`.
///
/// ```
/// use quickerselect::{select, Reverse};
///
/// let mut v = [4, 9, 1, 7, 3];
/// let range = select(&mut Reverse(&mut v[..]), 2).unwrap();
/// let mut largest = v[range].to_vec();
/// largest.sort();
/// assert_eq!(largest, [7, 9]);
/// ```
#[derive(Debug)]
pub struct Reverse<D>(pub D);

impl<D: Selectable> Selectable for Reverse<D> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0.less(j, i)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}

// Presents the wrapped collection back to front: position `i` is position
// `len - 1 - i` of the inner collection.
pub(crate) struct Mirror<'a, D: ?Sized + 'a> {
    inner: &'a mut D,
    last: usize,
}

impl<'a, D: Selectable + ?Sized> Mirror<'a, D> {
    pub(crate) fn new(inner: &'a mut D) -> Mirror<'a, D> {
        let last = inner.len().wrapping_sub(1);
        Mirror { inner, last }
    }
}

impl<'a, D: Selectable + ?Sized> Selectable for Mirror<'a, D> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline(always)]
    fn less(&self, i: usize, j: usize) -> bool {
        self.inner.less(self.last - i, self.last - j)
    }

    #[inline(always)]
    fn swap(&mut self, i: usize, j: usize) {
        self.inner.swap(self.last - i, self.last - j)
    }
}
