//! Array layouts that are handed to the global allocator.
use core::alloc;

use crate::error::TryReserveError;

/// A non-empty layout which can be allocated.
///
/// Wraps the `Layout` structure from core. The global allocator must never be asked for zero
/// bytes, so array layouts that occupy no memory at all are not representable by this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NonZeroLayout(alloc::Layout);

impl NonZeroLayout {
    /// The layout for `capacity` consecutive elements of `T`.
    ///
    /// Returns `Ok(None)` when such an array occupies no bytes, that is for a capacity of zero or
    /// for a zero-sized `T`. Fails if the byte size overflows `isize::MAX`.
    pub fn array<T>(capacity: usize) -> Result<Option<Self>, TryReserveError> {
        let layout = alloc::Layout::array::<T>(capacity)
            .map_err(|_| TryReserveError::CapacityOverflow { requested: capacity })?;
        Ok(Self::from_layout(layout))
    }

    /// Creates a non-empty layout if the given layout is not empty.
    pub fn from_layout(layout: alloc::Layout) -> Option<Self> {
        if layout.size() == 0 {
            None
        } else {
            Some(NonZeroLayout(layout))
        }
    }

    /// Return the size of the layout, never zero.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Return the alignment of the layout.
    pub fn align(&self) -> usize {
        self.0.align()
    }
}

impl From<NonZeroLayout> for alloc::Layout {
    fn from(layout: NonZeroLayout) -> alloc::Layout {
        layout.0
    }
}
