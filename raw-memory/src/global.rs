//! The allocation primitive, the global allocator seen through `NonZeroLayout`.
use core::ptr::NonNull;

use crate::error::TryReserveError;
use crate::layout::NonZeroLayout;

pub(crate) fn allocate(layout: NonZeroLayout) -> Result<NonNull<u8>, TryReserveError> {
    // SAFETY: the layout is not empty due to `NonZeroLayout`.
    let ptr = unsafe { alloc::alloc::alloc(layout.into()) };
    NonNull::new(ptr).ok_or(TryReserveError::AllocError { layout: layout.into() })
}

/// ## Safety
/// `ptr` must have been returned by `allocate` with the very same `layout`.
pub(crate) unsafe fn deallocate(ptr: NonNull<u8>, layout: NonZeroLayout) {
    // SAFETY: all preconditions have been propagated.
    alloc::alloc::dealloc(ptr.as_ptr(), layout.into())
}
