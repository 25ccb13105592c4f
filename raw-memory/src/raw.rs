//! Contains the `RawMemory` implementation.
//!
//! [See `RawMemory` for the main information][`RawMemory`].
//!
//! [`RawMemory`]: struct.RawMemory.html
use core::{fmt, mem, ptr};
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ptr::NonNull;

use crate::error::TryReserveError;
use crate::global;
use crate::layout::NonZeroLayout;

/// An owned allocation with room for a fixed number of `T`, none of which are alive.
///
/// This is the storage half of a vector. It allocates once, with exactly the requested capacity,
/// and deallocates when dropped. It never constructs or drops any element. Which slots hold live
/// values is the business of the owner, who must drop them before the memory goes away.
///
/// The allocation can be moved, swapped and taken but never duplicated. There is no way to grow
/// it in place, a larger capacity means a new `RawMemory`.
///
/// # Usage
///
/// ```
/// use core::ptr;
/// use raw_memory::RawMemory;
///
/// let mut memory = RawMemory::<String>::with_capacity(2);
/// assert_eq!(memory.capacity(), 2);
///
/// unsafe {
///     // SAFETY: in bounds, and the slot holds no value yet.
///     ptr::write(memory.ptr_at_mut(0), String::from("placed"));
///     assert_eq!(memory.slot(0).assume_init_ref(), "placed");
///     // SAFETY: initialized above, and nothing refers to it anymore.
///     ptr::drop_in_place(memory.ptr_at_mut(0));
/// }
/// ```
///
/// An empty allocation, either of zero capacity or for a zero-sized type, does not touch the
/// allocator at all. Its pointer is dangling but well-aligned, exactly as for an empty slice.
pub struct RawMemory<T> {
    /// Start of the allocation, dangling if nothing was allocated.
    ptr: NonNull<T>,
    /// The number of `T` slots the allocation provides.
    capacity: usize,
    /// The memory is for values of `T`, even though it does not own any of them itself.
    elements: PhantomData<T>,
}

impl<T> RawMemory<T> {
    /// Create an empty allocation.
    ///
    /// This does not allocate.
    pub const fn new() -> Self {
        RawMemory {
            ptr: NonNull::dangling(),
            capacity: 0,
            elements: PhantomData,
        }
    }

    /// Allocate room for exactly `capacity` elements.
    ///
    /// ## Panics
    /// This method panics if the size of the allocation in bytes would overflow `isize::MAX`. It
    /// calls `handle_alloc_error` if the allocator fails.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(memory) => memory,
            Err(err) => err.raise(),
        }
    }

    /// Try to allocate room for exactly `capacity` elements.
    ///
    /// ```
    /// use raw_memory::{RawMemory, TryReserveError};
    ///
    /// let memory = RawMemory::<u64>::try_with_capacity(usize::MAX);
    /// assert!(matches!(memory, Err(TryReserveError::CapacityOverflow { .. })));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let layout = match NonZeroLayout::array::<T>(capacity) {
            Ok(Some(layout)) => layout,
            // No bytes to allocate, a dangling pointer serves for any number of slots.
            Ok(None) => return Ok(RawMemory {
                ptr: NonNull::dangling(),
                capacity,
                elements: PhantomData,
            }),
            Err(err) => {
                tracing::debug!(capacity, error = %err, "refusing oversized element storage");
                return Err(err);
            }
        };

        let ptr = global::allocate(layout).map_err(|err| {
            tracing::debug!(capacity, bytes = layout.size(), "allocation of element storage failed");
            err
        })?;

        Ok(RawMemory {
            ptr: ptr.cast(),
            capacity,
            elements: PhantomData,
        })
    }

    /// Returns the number of elements the allocation can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pointer to the first slot.
    ///
    /// Dangling but aligned when nothing is allocated.
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to the first slot.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The address of the slot at `offset`.
    ///
    /// The offset `capacity` is allowed and yields the one-past-the-end pointer, which must not be
    /// read from or written to.
    ///
    /// ## Panics
    /// This method panics if `offset > self.capacity()`.
    pub fn ptr_at(&self, offset: usize) -> *const T {
        self.assert_offset(offset);
        unsafe {
            // SAFETY: inbounds of the allocation or one past its end.
            self.as_ptr().add(offset)
        }
    }

    /// The mutable address of the slot at `offset`.
    ///
    /// ## Panics
    /// This method panics if `offset > self.capacity()`.
    pub fn ptr_at_mut(&mut self, offset: usize) -> *mut T {
        self.assert_offset(offset);
        unsafe {
            // SAFETY: inbounds of the allocation or one past its end.
            self.as_mut_ptr().add(offset)
        }
    }

    /// View a slot, which may or may not contain a value.
    ///
    /// ## Panics
    /// This method panics if `index >= self.capacity()`.
    pub fn slot(&self, index: usize) -> &MaybeUninit<T> {
        self.assert_index(index);
        unsafe {
            // SAFETY: inbounds, and `MaybeUninit` makes no claim about the contents.
            &*(self.as_ptr().add(index) as *const MaybeUninit<T>)
        }
    }

    /// Mutably view a slot, which may or may not contain a value.
    ///
    /// Overwriting the slot through the returned reference never drops a previous value.
    ///
    /// ## Panics
    /// This method panics if `index >= self.capacity()`.
    pub fn slot_mut(&mut self, index: usize) -> &mut MaybeUninit<T> {
        self.assert_index(index);
        unsafe {
            // SAFETY: inbounds, unaliased as we borrow `self` mutably.
            &mut *(self.as_mut_ptr().add(index) as *mut MaybeUninit<T>)
        }
    }

    /// Exchange the allocations of two owners.
    ///
    /// No element is moved, only the pointers and capacities.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.capacity, &mut other.capacity);
    }

    /// Move the allocation out, leaving an empty one behind.
    pub fn take(&mut self) -> Self {
        mem::replace(self, RawMemory::new())
    }

    fn assert_offset(&self, offset: usize) {
        assert!(
            offset <= self.capacity,
            "offset {} out of bounds for raw memory of capacity {}",
            offset,
            self.capacity,
        );
    }

    fn assert_index(&self, index: usize) {
        assert!(
            index < self.capacity,
            "slot {} out of bounds for raw memory of capacity {}",
            index,
            self.capacity,
        );
    }
}

impl<T> Default for RawMemory<T> {
    fn default() -> Self {
        RawMemory::new()
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        // Zero capacity and zero-sized types never allocated. The layout is recomputed exactly as
        // it was for the allocation, which also means it can not fail now.
        if let Ok(Some(layout)) = NonZeroLayout::array::<T>(self.capacity) {
            unsafe {
                // SAFETY: allocated by `try_with_capacity` with this layout.
                global::deallocate(self.ptr.cast(), layout)
            }
        }
    }
}

impl<T> fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

// SAFETY: the memory is uniquely owned, values of `T` placed into it are sent along with it.
unsafe impl<T: Send> Send for RawMemory<T> {}
// SAFETY: shared access only hands out shared views of the slots.
unsafe impl<T: Sync> Sync for RawMemory<T> {}

/// Relocate `count` values between two allocations.
///
/// ## Safety
/// The source range must hold live values, the target range must be unoccupied, and both must be
/// inbounds of their allocation. Afterwards the source slots must be treated as empty.
pub unsafe fn relocate<T>(from: *const T, to: *mut T, count: usize) {
    // Moves in Rust are bitwise and can not fail, so there is never a reason to clone instead.
    ptr::copy_nonoverlapping(from, to, count)
}
