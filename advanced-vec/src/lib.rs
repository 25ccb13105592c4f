//! A growable vector that owns its allocation and handles every object lifetime itself.
//!
//! The [`Vector`] is built in two layers. The storage is a [`RawMemory`]: an allocation of
//! uninitialized slots that never constructs or drops a value. On top of it, the vector keeps the
//! number of live elements and is responsible for creating, moving and dropping them. Growth
//! allocates a new `RawMemory`, moves the elements over and swaps the allocations.
//!
//! The container behaves like the standard `Vec` in most regards and dereferences to a slice. It
//! differs where it is more explicit:
//!
//! * Capacity grows by doubling only, starting at one, and [`reserve`] takes a total capacity.
//! * [`emplace_back`] and [`emplace`] construct the element from a closure. The closure runs
//!   before any element moves, so a panic leaves the vector untouched.
//! * Positional methods ([`insert`], [`emplace`], [`erase`]) return the index of the affected
//!   position.
//!
//! ```rust
//! use advanced_vec::{vector, Vector};
//!
//! let mut vec: Vector<&str> = vector!["tic", "toe"];
//! let at = vec.insert(1, "tac");
//! assert_eq!(vec, ["tic", "tac", "toe"]);
//!
//! vec.erase(at);
//! vec.pop_back();
//! assert_eq!(vec, ["tic"]);
//! ```
//!
//! [`RawMemory`]: ../raw_memory/raw/struct.RawMemory.html
//! [`Vector`]: vector/struct.Vector.html
//! [`reserve`]: vector/struct.Vector.html#method.reserve
//! [`emplace_back`]: vector/struct.Vector.html#method.emplace_back
//! [`emplace`]: vector/struct.Vector.html#method.emplace
//! [`insert`]: vector/struct.Vector.html#method.insert
//! [`erase`]: vector/struct.Vector.html#method.erase

// Copyright 2026 Andreas Molzer
#![no_std]
#![deny(missing_docs)]

#[cfg(test)]
extern crate std;

mod guard;
pub mod into_iter;
pub mod vector;

pub use raw_memory::{RawMemory, TryReserveError};
pub use crate::into_iter::IntoIter;
pub use crate::vector::Vector;

/// Create a [`Vector`] containing the arguments.
///
/// Works like `vec!`, either with a list of elements or with one element and a length.
///
/// ```
/// use advanced_vec::vector;
///
/// let list = vector![1, 2, 3];
/// assert_eq!(list.capacity(), 3);
///
/// let repeated = vector![String::from("abc"); 2];
/// assert_eq!(repeated, ["abc", "abc"]);
/// ```
///
/// [`Vector`]: vector/struct.Vector.html
#[macro_export]
macro_rules! vector {
    () => {
        $crate::Vector::new()
    };
    ($elem:expr; $n:expr) => {{
        let elem = $elem;
        $crate::Vector::from_fn($n, |_| ::core::clone::Clone::clone(&elem))
    }};
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from([$($x),+])
    };
}

// Provides the Readme.md as doc, to ensure the example works!
#[doc = include_str!("../Readme.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
