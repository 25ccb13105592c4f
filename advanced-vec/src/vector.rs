//! Contains the `Vector` implementation.
//!
//! [See `Vector` for the main information][`Vector`].
//!
//! [`Vector`]: struct.Vector.html
use core::{borrow, cmp, fmt, hash, iter, mem, ops, ptr, slice};
use raw_memory::{relocate, RawMemory, TryReserveError};

use crate::guard::PartialRun;

/// A contiguous growable array that manages its own allocation.
///
/// The elements live in a [`RawMemory`], an owned allocation of uninitialized slots. The vector
/// adds the logical length on top: the first `len()` slots hold values, the remaining slots up to
/// `capacity()` are allocated but empty. Growth never initializes this tail.
///
/// When an insertion finds no free slot the capacity doubles, starting from one. A new allocation
/// is made, the elements are moved over and the old allocation is released.
///
/// # Basic Usage
///
/// ```
/// use advanced_vec::Vector;
///
/// let mut vec = Vector::new();
/// vec.push_back(5);
/// vec.push_back(10);
/// vec.push_back(15);
///
/// assert_eq!(vec.len(), 3);
/// assert_eq!(vec.capacity(), 4);
/// assert_eq!(vec, [5, 10, 15]);
/// ```
///
/// ## Positions
///
/// Positional operations take and return indices. The index `len()` denotes the end, which is a
/// valid position for insertion but not for erasing.
///
/// ```
/// use advanced_vec::{vector, Vector};
///
/// let mut vec: Vector<u32> = vector![1, 2];
/// let at = vec.insert(1, 99);
/// assert_eq!(vec, [1, 99, 2]);
///
/// let next = vec.erase(at);
/// assert_eq!(vec, [1, 2]);
/// assert_eq!(vec[next], 2);
/// ```
///
/// ## Panic safety
///
/// Constructors, `Clone` and the closures passed to the `emplace` methods may panic. Every
/// operation that allocates leaves the vector exactly as it was when that happens: nothing is
/// moved before the new element and the new storage exist. The one exception is
/// [`clone_from`] into a vector that already has enough capacity, which reuses the elements in
/// place and may stop halfway.
///
/// [`RawMemory`]: ../../raw_memory/raw/struct.RawMemory.html
/// [`clone_from`]: #method.clone_from
pub struct Vector<T> {
    data: RawMemory<T>,
    size: usize,
}

impl<T> Vector<T> {
    /// Create an empty vector.
    ///
    /// This does not allocate.
    pub const fn new() -> Self {
        Vector {
            data: RawMemory::new(),
            size: 0,
        }
    }

    /// Create an empty vector with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            data: RawMemory::with_capacity(capacity),
            size: 0,
        }
    }

    /// Create a vector of `len` elements, the element at index `i` being `f(i)`.
    ///
    /// The capacity is exactly `len`. Should `f` panic then all elements created before are
    /// dropped and the allocation is released.
    ///
    /// ```
    /// use advanced_vec::Vector;
    ///
    /// let squares = Vector::from_fn(4, |i| i * i);
    /// assert_eq!(squares, [0, 1, 4, 9]);
    /// ```
    pub fn from_fn<F>(len: usize, mut f: F) -> Self
        where F: FnMut(usize) -> T,
    {
        let mut data = RawMemory::with_capacity(len);
        // Dropped before `data` when `f` unwinds.
        let mut run = unsafe {
            // SAFETY: the allocation has exactly `len` empty slots.
            PartialRun::new(data.as_mut_ptr())
        };

        for i in 0..len {
            let value = f(i);
            unsafe {
                // SAFETY: at most `len` elements are pushed.
                run.push(value);
            }
        }

        let size = run.commit();
        Vector { data, size }
    }

    /// Returns the number of elements in the vector.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of elements the vector can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Returns `true` if the vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Extracts a slice containing the entire vector.
    pub fn as_slice(&self) -> &[T] {
        unsafe {
            // SAFETY: length is the number of initialized elements.
            slice::from_raw_parts(self.data.as_ptr(), self.size)
        }
    }

    /// Extracts the mutable slice containing the entire vector.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe {
            // SAFETY: length is the number of initialized elements, unaliased as we borrow `self`
            // mutably.
            slice::from_raw_parts_mut(self.data.as_mut_ptr(), self.size)
        }
    }

    /// Pointer to the first element, dangling if nothing has been allocated.
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Mutable pointer to the first element, dangling if nothing has been allocated.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Ensure room for at least `new_capacity` elements in total.
    ///
    /// Note that, unlike `Vec::reserve`, the argument is the total capacity and not the number of
    /// additional elements. Nothing happens if the capacity is already large enough. Otherwise the
    /// vector reallocates to exactly `new_capacity`.
    ///
    /// ## Panics
    /// This method panics if the new capacity in bytes overflows `isize::MAX`.
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(err) = self.try_reserve(new_capacity) {
            err.raise()
        }
    }

    /// Try to ensure room for at least `new_capacity` elements in total.
    ///
    /// The vector is unchanged if this returns an error.
    ///
    /// ```
    /// use advanced_vec::{vector, TryReserveError, Vector};
    ///
    /// let mut vec: Vector<u64> = vector![1, 2, 3];
    /// let err = vec.try_reserve(usize::MAX).unwrap_err();
    /// assert!(matches!(err, TryReserveError::CapacityOverflow { .. }));
    /// assert_eq!(vec, [1, 2, 3]);
    ///
    /// vec.try_reserve(16).unwrap();
    /// assert_eq!(vec.capacity(), 16);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TryReserveError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let new_data = RawMemory::try_with_capacity(new_capacity)?;
        self.relocate_into(new_data);
        Ok(())
    }

    /// Change the length to `new_len`, creating new elements with `f`.
    ///
    /// A shorter length drops the tail, see [`truncate`]. A longer length first reserves exactly
    /// `new_len` elements. If `f` panics the elements created so far are dropped again and the
    /// length stays as before, while the capacity may have grown.
    ///
    /// [`truncate`]: #method.truncate
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
        where F: FnMut() -> T,
    {
        if new_len <= self.size {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        let mut run = unsafe {
            // SAFETY: the slots `[len, new_len)` are allocated and empty.
            PartialRun::new(self.end_mut_ptr())
        };

        for _ in self.size..new_len {
            let value = f();
            unsafe {
                // SAFETY: stays below `new_len`.
                run.push(value);
            }
        }

        self.size += run.commit();
    }

    /// Shorten the vector to a maximum length.
    ///
    /// If the length is not larger than `len` this has no effect.
    ///
    /// The tail of the vector is dropped starting from the last element. A `panic` during `Drop`
    /// of one element stops the truncation at that point. The elements not yet dropped stay in the
    /// vector and are dropped with it.
    ///
    /// ## Example
    ///
    /// ```
    /// use advanced_vec::vector;
    ///
    /// let mut vec = vector![0usize, 1, 2];
    /// vec.truncate(1);
    /// assert_eq!(vec, [0]);
    /// assert_eq!(vec.capacity(), 3);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        struct SetLenOnDrop<'a> {
            len: &'a mut usize,
            local_len: usize,
        }

        impl Drop for SetLenOnDrop<'_> {
            fn drop(&mut self) {
                *self.len = self.local_len;
            }
        }

        let mut ptr = self.end_mut_ptr();
        let current_length = self.size;
        let mut set_len = SetLenOnDrop { len: &mut self.size, local_len: current_length };

        for _ in len..current_length {
            set_len.local_len -= 1;

            unsafe {
                ptr = ptr.sub(1);
                ptr::drop_in_place(ptr);
            }
        }
    }

    /// Remove all elements, keeping the allocation.
    ///
    /// This is an alias for [`truncate(0)`][truncate].
    ///
    /// [truncate]: #method.truncate
    pub fn clear(&mut self) {
        self.truncate(0)
    }

    /// Appends an element to the back of the vector.
    ///
    /// Returns a reference to the new element. See [`emplace_back`] for the growth behaviour.
    ///
    /// [`emplace_back`]: #method.emplace_back
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back(move || value)
    }

    /// Constructs an element at the back of the vector.
    ///
    /// If all slots are occupied the capacity doubles (or becomes one if it was zero). In that
    /// case the new element is created in the new allocation before any existing element moves,
    /// so a panicking `f` leaves the vector as it was.
    ///
    /// ```
    /// use advanced_vec::Vector;
    ///
    /// let mut names = Vector::new();
    /// names.emplace_back(|| String::from("first")).push_str(" entry");
    /// assert_eq!(names[0], "first entry");
    /// ```
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T,
    {
        if self.size == self.capacity() {
            let mut new_data = RawMemory::with_capacity(self.grown_capacity());
            let value = f();
            unsafe {
                // SAFETY: the new allocation is strictly larger than the length.
                ptr::write(new_data.ptr_at_mut(self.size), value);
            }
            self.relocate_into(new_data);
        } else {
            let value = f();
            unsafe {
                // SAFETY: `len < capacity`, the slot is empty.
                ptr::write(self.end_mut_ptr(), value);
            }
        }

        self.size += 1;
        let last = self.size - 1;
        &mut self.as_mut_slice()[last]
    }

    /// Drop the last element.
    ///
    /// ## Panics
    /// This method panics if the vector is empty.
    pub fn pop_back(&mut self) {
        assert!(self.size != 0, "pop_back on an empty vector");
        self.truncate(self.size - 1);
    }

    /// Removes the last element from a vector and returns it, or `None` if it is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        self.size -= 1;
        let val = unsafe {
            // SAFETY: initialized and now outside the length, no reference of any kind exists to it.
            ptr::read(self.data.ptr_at(self.size))
        };

        Some(val)
    }

    /// Constructs an element at `index`, shifting all elements after it to the right.
    ///
    /// Returns `index`, the position of the new element. The element is created before the
    /// vector is touched, so a panicking `f` has no effect other than the panic. When the vector is
    /// full it grows as in [`emplace_back`] and the existing elements are moved around the new one.
    /// An empty vector always gets a fresh allocation for exactly one element, even if it had
    /// capacity reserved.
    ///
    /// ## Panics
    /// This method panics if `index > len()`.
    ///
    /// [`emplace_back`]: #method.emplace_back
    pub fn emplace<F>(&mut self, index: usize, f: F) -> usize
        where F: FnOnce() -> T,
    {
        assert!(
            index <= self.size,
            "insertion index (is {}) should be <= len (is {})",
            index,
            self.size,
        );

        if self.size < self.capacity() && self.size != 0 {
            let value = f();
            unsafe {
                // SAFETY: one empty slot exists behind the elements. A single move relocates the
                // last element into it and shifts the rest of the suffix after it.
                let at = self.data.ptr_at_mut(index);
                ptr::copy(at, at.add(1), self.size - index);
                ptr::write(at, value);
            }
        } else {
            let mut new_data = RawMemory::with_capacity(self.grown_capacity());
            let value = f();
            unsafe {
                // SAFETY: `index <= len < new capacity`, and the new allocation is empty. The
                // prefix goes first, then the suffix behind the new element.
                ptr::write(new_data.ptr_at_mut(index), value);
                relocate(self.data.as_ptr(), new_data.as_mut_ptr(), index);
                relocate(
                    self.data.ptr_at(index),
                    new_data.ptr_at_mut(index + 1),
                    self.size - index);
            }
            self.adopt(new_data);
        }

        self.size += 1;
        index
    }

    /// Inserts an element at `index`, shifting all elements after it to the right.
    ///
    /// Returns `index`, the position of the new element.
    ///
    /// ## Panics
    /// This method panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        self.emplace(index, move || value)
    }

    /// Removes the element at `index`, shifting all elements after it to the left.
    ///
    /// Returns `index`, which now denotes the element that followed the erased one, or the end if
    /// the last element was erased.
    ///
    /// ## Panics
    /// This method panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Removes and returns the element at `index`, shifting all elements after it to the left.
    ///
    /// ## Panics
    /// This method panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.size,
            "removal index (is {}) should be < len (is {})",
            index,
            self.size,
        );

        unsafe {
            // SAFETY: `index` is a live element. Everything behind it moves one slot to the front,
            // vacating the last slot, which the length no longer covers.
            let at = self.data.ptr_at_mut(index);
            let value = ptr::read(at);
            ptr::copy(at.add(1), at, self.size - index - 1);
            self.size -= 1;
            value
        }
    }

    /// Exchange the contents, including the allocations, of two vectors.
    ///
    /// This is the move-assignment of the vector and does not touch any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.data.swap(&mut other.data);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Take the allocation and the length, leaving an empty vector.
    ///
    /// The caller becomes responsible for the elements.
    pub(crate) fn take_storage(&mut self) -> (RawMemory<T>, usize) {
        let size = mem::replace(&mut self.size, 0);
        (self.data.take(), size)
    }

    /// The capacity of a new allocation with room for one more element, twice the length.
    fn grown_capacity(&self) -> usize {
        match self.size {
            0 => 1,
            size => size.checked_mul(2).unwrap_or_else(|| {
                TryReserveError::CapacityOverflow { requested: size }.raise()
            }),
        }
    }

    /// Move all elements to the front of `new_data` and use it as storage from now on.
    fn relocate_into(&mut self, mut new_data: RawMemory<T>) {
        debug_assert!(new_data.capacity() >= self.size);
        unsafe {
            // SAFETY: the new allocation is distinct and holds no value in these slots.
            relocate(self.data.as_ptr(), new_data.as_mut_ptr(), self.size);
        }
        self.adopt(new_data);
    }

    /// Switch to `new_data`, to which all elements have been moved already.
    fn adopt(&mut self, mut new_data: RawMemory<T>) {
        tracing::trace!(
            old_capacity = self.capacity(),
            new_capacity = new_data.capacity(),
            len = self.size,
            element_size = mem::size_of::<T>(),
            "reallocated vector storage"
        );

        self.data.swap(&mut new_data);
        // Only vacated slots remain in the old allocation, which is released here.
        drop(new_data);
    }

    fn end_mut_ptr(&mut self) -> *mut T {
        self.data.ptr_at_mut(self.size)
    }
}

impl<T: Default> Vector<T> {
    /// Create a vector of `len` default values.
    ///
    /// The capacity is exactly `len`. Should a `default` call panic then all elements created
    /// before are dropped and the allocation is released.
    pub fn with_len(len: usize) -> Self {
        Vector::from_fn(len, |_| T::default())
    }

    /// Change the length to `new_len`, appending default values if it grows.
    ///
    /// See [`resize_with`] for the details.
    ///
    /// [`resize_with`]: #method.resize_with
    pub fn resize(&mut self, new_len: usize) {
        self.resize_with(new_len, T::default)
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Vector::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice())
        }
    }
}

impl<T: Clone> Clone for Vector<T> {
    /// Clone all elements into an allocation of exactly the same length.
    fn clone(&self) -> Self {
        Vector::from_fn(self.size, |i| self[i].clone())
    }

    /// Overwrite `self` with a clone of `source`.
    ///
    /// If `source` has more elements than `self` has capacity, a complete clone is created first
    /// and then replaces `self`, leaving `self` untouched if any clone panics. Otherwise the
    /// existing allocation is reused. The common prefix is updated with `Clone::clone_from`, the
    /// excess is truncated or the missing elements are cloned into the free capacity. A panic in
    /// this second case leaves `self` partially updated.
    fn clone_from(&mut self, source: &Self) {
        if source.size > self.capacity() {
            *self = source.clone();
            return;
        }

        let common = self.size.min(source.size);
        self[..common].clone_from_slice(&source[..common]);
        self.truncate(source.size);
        for item in &source[common..] {
            // Within capacity, this never reallocates.
            self.push_back(item.clone());
        }
    }
}

impl<T> ops::Deref for Vector<T> {
    type Target = [T];
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> ops::DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I> ops::Index<I> for Vector<T>
    where I: slice::SliceIndex<[T]>,
{
    type Output = I::Output;

    fn index(&self, idx: I) -> &I::Output {
        ops::Index::index(&**self, idx)
    }
}

impl<T, I> ops::IndexMut<I> for Vector<T>
    where I: slice::SliceIndex<[T]>,
{
    fn index_mut(&mut self, idx: I) -> &mut I::Output {
        ops::IndexMut::index_mut(&mut **self, idx)
    }
}

impl<T: fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

impl<T, U> PartialEq<Vector<U>> for Vector<T>
    where T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U>) -> bool {
        self[..] == other[..]
    }
}

impl<T, U> PartialEq<[U]> for Vector<T>
    where T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self[..] == other[..]
    }
}

impl<T, U> PartialEq<&[U]> for Vector<T>
    where T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        self[..] == other[..]
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T>
    where T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        self[..] == other[..]
    }
}

impl<T: PartialOrd> PartialOrd for Vector<T> {
    #[inline]
    fn partial_cmp(&self, other: &Vector<T>) -> Option<cmp::Ordering> {
        PartialOrd::partial_cmp(&**self, &**other)
    }
}

impl<T: Ord> Ord for Vector<T> {
    #[inline]
    fn cmp(&self, other: &Vector<T>) -> cmp::Ordering {
        Ord::cmp(&**self, &**other)
    }
}

impl<T: Eq> Eq for Vector<T> { }

impl<T: hash::Hash> hash::Hash for Vector<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        hash::Hash::hash(&**self, state)
    }
}

impl<T> borrow::Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        &**self
    }
}

impl<T> borrow::BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut **self
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        &**self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut **self
    }
}

/// Append all items of the iterator, growing as `push_back` does.
impl<T> iter::Extend<T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item=T>,
    {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> iter::Extend<&'a T> for Vector<T> {
    fn extend<I>(&mut self, iter: I)
        where I: IntoIterator<Item=&'a T>,
    {
        self.extend(iter.into_iter().copied())
    }
}

impl<T> iter::FromIterator<T> for Vector<T> {
    fn from_iter<I>(iter: I) -> Self
        where I: IntoIterator<Item=T>,
    {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&'_ [T]> for Vector<T> {
    fn from(slice: &[T]) -> Self {
        Vector::from_fn(slice.len(), |i| slice[i].clone())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Vector::with_capacity(N);
        vec.extend(array);
        vec
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::Vector;

    use core::cell::Cell;
    use std::string::{String, ToString};
    use core::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Trigger<'a> {
        panic_on_drop: bool,
        dropped_counter: &'a Cell<usize>,
    }

    impl Drop for Trigger<'_> {
        fn drop(&mut self) {
            if self.panic_on_drop { panic!("Trigger triggered") }
            // Record this as a normal drop.
            self.dropped_counter.set(self.dropped_counter.get() + 1);
        }
    }

    struct AbortMismatchedDropCount<'a> {
        counter: &'a Cell<usize>,
        expected: usize,
    }

    impl Drop for AbortMismatchedDropCount<'_> {
        fn drop(&mut self) {
            struct ForceDupPanic;

            impl Drop for ForceDupPanic {
                fn drop(&mut self) { panic!() }
            }

            if self.expected != self.counter.get() {
                // For duplicate panic, and thus abort
                let _x = ForceDupPanic;
                panic!();
            }
        }
    }

    #[test]
    fn init_and_use() {
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        struct Foo(usize);

        const COUNT: usize = 30;

        let mut vec = Vector::new();
        assert_eq!(vec.capacity(), 0);
        assert_eq!(vec.len(), 0);
        for i in 0..COUNT {
            assert_eq!(*vec.push_back(Foo(i)), Foo(i));
        }

        assert_eq!(vec.capacity(), 32);
        assert_eq!(vec.len(), COUNT);

        for i in (0..COUNT).rev() {
            assert_eq!(vec.pop(), Some(Foo(i)));
        }

        assert_eq!(vec.pop(), None);
        assert_eq!(vec.capacity(), 32);
        assert_eq!(vec.len(), 0);
    }

    #[test]
    fn zst_drop() {
        const COUNT: usize = 30;
        static DROP_COUNTER: AtomicUsize = AtomicUsize::new(0);
        struct HasDrop(#[allow(dead_code)] usize);

        impl Drop for HasDrop {
            fn drop(&mut self) {
                DROP_COUNTER.fetch_add(1, Ordering::SeqCst);
            }
        }

        let mut vec = Vector::new();
        for i in 0..COUNT {
            vec.push_back(HasDrop(i));
        }

        drop(vec);
        assert_eq!(DROP_COUNTER.load(Ordering::SeqCst), COUNT);
    }

    #[test]
    fn zst() {
        #[derive(Debug, PartialEq)]
        struct Zst;

        let mut vec = Vector::new();
        for _ in 0..5 {
            vec.push_back(Zst);
        }
        vec.insert(2, Zst);
        vec.erase(0);

        assert_eq!(vec.len(), 5);
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec.pop(), Some(Zst));
    }

    #[test]
    fn reserve_is_exact() {
        let mut vec: Vector<u8> = Vector::new();
        vec.reserve(5);
        assert_eq!(vec.capacity(), 5);
        vec.reserve(3);
        assert_eq!(vec.capacity(), 5);
        vec.extend([1, 2, 3, 4, 5]);
        assert_eq!(vec.capacity(), 5);
        vec.push_back(6);
        assert_eq!(vec.capacity(), 10);
    }

    #[test]
    fn insert_without_reallocation() {
        let mut vec: Vector<u32> = Vector::with_capacity(4);
        vec.push_back(1);
        vec.push_back(3);
        let address = vec.as_ptr();

        assert_eq!(vec.insert(1, 2), 1);
        assert_eq!(vec.insert(3, 4), 3);
        assert_eq!(vec, [1, 2, 3, 4]);
        assert_eq!(vec.as_ptr(), address);
    }

    #[test]
    fn insert_into_reserved_empty_vector() {
        let mut vec: Vector<u32> = Vector::with_capacity(4);
        let reserved = vec.as_ptr();
        assert_eq!(vec.insert(0, 7), 0);
        assert_eq!(vec, [7]);
        assert_eq!(vec.capacity(), 1);
        assert_ne!(vec.as_ptr(), reserved);

        // Not empty anymore, so the next insert doubles.
        vec.insert(0, 6);
        assert_eq!(vec, [6, 7]);
        assert_eq!(vec.capacity(), 2);
    }

    #[test]
    fn insert_into_cleared_vector() {
        let mut vec: Vector<u32> = (0..8).collect();
        vec.clear();
        vec.insert(0, 1);
        assert_eq!(vec, [1]);
        assert_eq!(vec.capacity(), 1);
    }

    #[test]
    fn push_back_into_reserved_empty_vector() {
        let mut vec: Vector<u32> = Vector::with_capacity(4);
        vec.push_back(7);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn insert_with_reallocation() {
        let mut vec: Vector<String> = Vector::new();
        vec.insert(0, "b".into());
        vec.insert(0, "a".into());
        vec.insert(2, "d".into());
        assert_eq!(vec.capacity(), 4);
        vec.insert(2, "c".into());
        assert_eq!(vec.capacity(), 4);
        vec.insert(1, "ab".into());
        assert_eq!(vec.capacity(), 8);
        assert_eq!(vec, ["a", "ab", "b", "c", "d"]);
    }

    #[test]
    fn remove_and_erase() {
        let mut vec: Vector<u32> = (0..6).collect();
        assert_eq!(vec.remove(0), 0);
        assert_eq!(vec.erase(4), 4);
        assert_eq!(vec, [1, 2, 3, 4]);
        assert_eq!(vec.erase(1), 1);
        assert_eq!(vec, [1, 3, 4]);
    }

    #[test]
    #[should_panic = "should be < len"]
    fn erase_end() {
        let mut vec: Vector<u32> = (0..2).collect();
        vec.erase(2);
    }

    #[test]
    #[should_panic = "should be <= len"]
    fn insert_past_end() {
        let mut vec: Vector<u32> = (0..2).collect();
        vec.insert(3, 0);
    }

    #[test]
    #[should_panic = "pop_back on an empty vector"]
    fn pop_back_empty() {
        let mut vec: Vector<u32> = Vector::new();
        vec.pop_back();
    }

    #[test]
    fn truncations() {
        let drops: Cell<usize> = Cell::new(0);
        let mut vec = Vector::new();

        for _ in 0..16 {
            vec.push_back(Trigger { panic_on_drop: false, dropped_counter: &drops });
        }

        assert_eq!(drops.get(), 0);
        vec.truncate(8);
        assert_eq!(drops.get(), 8);
        vec.truncate(16);
        assert_eq!(drops.get(), 8);
        vec.pop_back();
        assert_eq!(drops.get(), 9);
        vec.resize_with(1, || unreachable!());
        assert_eq!(drops.get(), 15);
        vec.clear();
        assert_eq!(drops.get(), 16);
        assert_eq!(vec.capacity(), 16);
    }

    /// Tests panics during truncation behave as expected.
    ///
    /// Unwinding started in a panic during truncation should not effect `Drop` calls when the
    /// `Vector` itself is hit by the unwinding. We test this by voluntarily triggering an
    /// unwinding and counting the number of values which have been dropped regularly (that is,
    /// during the `Drop` of `Vector` when it is unwound).
    ///
    /// Note that this test is already `should_panic` and the observable failure is thus an abort
    /// from a double panic!
    #[test]
    #[should_panic = "Trigger triggered"]
    fn drop_safe_in_truncation() {
        let drops = Cell::new(0);

        // Is `Drop`ed *after* the Vector, and will record the number of usually dropped Triggers.
        let _abort_mismatch_raii = AbortMismatchedDropCount {
            counter: &drops,
            expected: 2,
        };

        let mut vec = Vector::new();

        vec.push_back(Trigger { panic_on_drop: false, dropped_counter: &drops });
        // This one is within the truncated tail but is not dropped until unwind as truncate
        // panics. If we were to skip dropping all values of the tail in unwind we'd notice.
        vec.push_back(Trigger { panic_on_drop: false, dropped_counter: &drops });
        vec.push_back(Trigger { panic_on_drop: true, dropped_counter: &drops });

        // Trigger!
        vec.truncate(1);
    }

    #[test]
    fn clone_from_reuses_capacity() {
        let source: Vector<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut target: Vector<String> = Vector::with_capacity(8);
        target.push_back("x".into());
        target.push_back("y".into());
        target.push_back("z".into());

        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), 8);

        let longer: Vector<String> = (0..5).map(|i| i.to_string()).collect();
        target.clone_from(&longer);
        assert_eq!(target, longer);
        assert_eq!(target.capacity(), 8);

        let too_long: Vector<String> = (0..9).map(|i| i.to_string()).collect();
        target.clone_from(&too_long);
        assert_eq!(target, too_long);
        assert_eq!(target.capacity(), 9);
    }

    #[test]
    fn swap_exchanges_storage() {
        let mut a: Vector<u8> = Vector::from([1, 2, 3]);
        let mut b: Vector<u8> = Vector::with_capacity(10);
        let a_ptr = a.as_ptr();

        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(b, [1, 2, 3]);
        assert_eq!(b.as_ptr(), a_ptr);
    }
}
