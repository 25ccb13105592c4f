use core::{mem, ptr};

/// A run of elements constructed into consecutive, previously empty slots.
///
/// Dropping the guard drops exactly the elements pushed so far. This is what undoes a batch when
/// one of its constructors panics. When the batch is complete, `commit` hands the elements to
/// their owner instead.
pub(crate) struct PartialRun<T> {
    /// The first slot of the run.
    start: *mut T,
    /// Number of slots that hold a value, counted from `start`.
    initialized: usize,
}

impl<T> PartialRun<T> {
    /// Start an empty run.
    ///
    /// ## Safety
    /// `start` must be valid for writes of every slot that is later pushed, and none of these
    /// slots may hold a live value.
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        PartialRun {
            start,
            initialized: 0,
        }
    }

    /// Place a value into the next slot.
    ///
    /// ## Safety
    /// The next slot must be within the range promised to `new`.
    pub(crate) unsafe fn push(&mut self, value: T) {
        ptr::write(self.start.add(self.initialized), value);
        self.initialized += 1;
    }

    /// Keep the elements and return their count.
    pub(crate) fn commit(self) -> usize {
        let count = self.initialized;
        mem::forget(self);
        count
    }
}

impl<T> Drop for PartialRun<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: exactly these have been initialized by `push`, and not handed out.
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized))
        }
    }
}
