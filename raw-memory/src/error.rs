//! The error of fallible storage allocation.
use core::alloc::Layout;

/// The error type for fallibly allocating element storage.
///
/// Returned by [`RawMemory::try_with_capacity`] and by the `try_*` methods of containers built on
/// top of it. The infallible constructors turn it into a panic or an allocation-error abort
/// instead, see [`TryReserveError::raise`].
///
/// [`RawMemory::try_with_capacity`]: ../raw/struct.RawMemory.html#method.try_with_capacity
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TryReserveError {
    /// The byte size of the requested capacity does not fit the address space.
    #[error("capacity overflow: {requested} elements exceed the maximum allocation size")]
    CapacityOverflow {
        /// The number of elements that was requested.
        requested: usize,
    },
    /// The global allocator could not provide the memory.
    #[error("memory allocation of {size} bytes failed", size = .layout.size())]
    AllocError {
        /// The layout of the failed request.
        layout: Layout,
    },
}

impl TryReserveError {
    /// Diverge the same way the standard collections do for this error.
    ///
    /// A capacity overflow is a panic, while an exhausted allocator is reported to
    /// `handle_alloc_error` which usually aborts the process.
    pub fn raise(self) -> ! {
        match self {
            TryReserveError::CapacityOverflow { .. } => panic!("capacity overflow"),
            TryReserveError::AllocError { layout } => alloc::alloc::handle_alloc_error(layout),
        }
    }
}
