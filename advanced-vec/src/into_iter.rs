//! The owning iterator of a `Vector`.
use core::{fmt, iter, ptr, slice};
use raw_memory::RawMemory;

use crate::vector::Vector;

/// An iterator that moves out of a vector.
///
/// Created by the `into_iter` method of [`Vector`]. The elements that are not yielded are dropped
/// along with the iterator, then the allocation is released.
///
/// [`Vector`]: ../vector/struct.Vector.html
// Internal invariant: `start <= end <= data.capacity()`, exactly `[start, end)` are alive.
pub struct IntoIter<T> {
    /// The allocation taken from the vector.
    data: RawMemory<T>,
    /// The first element not yet yielded from the front.
    start: usize,
    /// One past the last element not yet yielded from the back.
    end: usize,
}

impl<T> IntoIter<T> {
    /// View the remaining data as a slice.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: by the internal invariant these are initialized.
            slice::from_raw_parts(self.data.ptr_at(self.start), self.len())
        }
    }

    /// View the remaining data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        unsafe {
            // SAFETY: as in `as_slice`, and not aliased as it mutably borrows the iterator.
            slice::from_raw_parts_mut(self.data.ptr_at_mut(self.start), len)
        }
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        // The vector is left empty and its drop is a no-op.
        let (data, len) = self.take_storage();
        IntoIter {
            data,
            start: 0,
            end: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        let t = unsafe {
            // SAFETY: `start < end`, alive and afterwards outside the live range.
            ptr::read(self.data.ptr_at(self.start))
        };

        self.start += 1;
        Some(t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.start..self.end).size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        let t = unsafe {
            // SAFETY: `end` was alive and is now outside the live range.
            ptr::read(self.data.ptr_at(self.end))
        };

        Some(t)
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl<T> iter::FusedIterator for IntoIter<T> { }

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice())
        }
    }
}
