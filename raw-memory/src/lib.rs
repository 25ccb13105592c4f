//! Owned, uninitialized storage for a fixed number of elements.
//!
//! The [`RawMemory`] type is the lowest layer of a growable vector: an allocation of exactly
//! `capacity` slots of `T` that is obtained from and returned to the global allocator, without
//! ever constructing or dropping a value. Keeping these apart from the container that decides
//! which slots are alive makes it possible to reason about allocation and object lifetime
//! separately.
//!
//! The allocation is move-only. It can be swapped with another one or taken out, leaving an
//! empty allocation behind, but never cloned.
//!
//! ## Usage
//!
//! ```rust
//! use raw_memory::RawMemory;
//!
//! let mut memory: RawMemory<u32> = RawMemory::with_capacity(4);
//! memory.slot_mut(0).write(42);
//!
//! // The allocation does not know that slot 0 is initialized, the owner does.
//! let value = unsafe { memory.slot(0).assume_init_read() };
//! assert_eq!(value, 42);
//! ```
//!
//! Allocation failures are reported through [`TryReserveError`] by the fallible constructor and
//! handled like the standard collections do otherwise.

// Copyright 2026 Andreas Molzer
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
mod global;
pub mod layout;
pub mod raw;

pub use crate::error::TryReserveError;
pub use crate::layout::NonZeroLayout;
pub use crate::raw::{relocate, RawMemory};

// Provides the Readme.md as doc, to ensure the example works!
#[doc = include_str!("../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
