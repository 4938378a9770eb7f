//! growvec - a growable, contiguous vector with a pluggable allocator
//!
//! # Overview
//!
//! [`Vector<T, A>`] stores its elements in one block obtained from an
//! [`Allocator`]. It grows by doubling, inserts and erases by shifting the
//! tail, and reports its storage as live elements ([`Vector::len`]), total
//! slots ([`Vector::capacity`]) and free slots ([`Vector::remaining`]).
//!
//! # Quick Start
//!
//! ```
//! use growvec::{Error, Vector};
//!
//! let mut v = Vector::new();
//! for i in 0..5 {
//!     v.push(i);
//! }
//! assert_eq!(v.capacity(), 8);
//!
//! // Insert three copies of 9 before position 1.
//! v.insert_n(1, 3, 9).unwrap();
//! assert_eq!(v, [0, 9, 9, 9, 1, 2, 3, 4]);
//!
//! // Reads past the end are errors, not panics.
//! assert_eq!(v.at(8), Err(Error::OutOfRange { index: 8, len: 8 }));
//! ```
//!
//! # Allocators
//!
//! The default allocator is [`Global`]. Anything implementing
//! `allocator_api2`'s [`Allocator`] can be injected instead:
//!
//! ```
//! use bumpalo::Bump;
//! use growvec::Vector;
//!
//! let arena = Bump::new();
//! let mut v = Vector::new_in(&arena);
//! v.extend(["a", "b"]);
//! v.insert(1, "c").unwrap();
//! assert_eq!(v, ["a", "c", "b"]);
//! ```
//!
//! # Traversal
//!
//! Besides the usual iterators, cursors walk the vector in either direction
//! and can be flipped between the two:
//!
//! ```
//! use growvec::vector;
//!
//! let v = vector![1, 2, 3];
//! let mut cursor = v.rbegin();
//! assert_eq!(cursor.get(), Some(&3));
//! cursor.move_next();
//! assert_eq!(cursor.get(), Some(&2));
//! assert_eq!(cursor.reverse().get(), Some(&3));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Re-export public API from growvec_core
pub use growvec_core::{
    AllocError, Allocator, Cursor, CursorMut, Direction, Error, Global, IntoIter, Iter, IterMut,
    Vector, vector,
};

// Re-export modules for the less common types
pub use growvec_core::{cursor, iter};
