//! A growable, contiguous vector built by hand on top of an allocator.
//!
//! [`Vector<T, A>`] owns one block of memory obtained from an
//! [`Allocator`]. The block is split by three watermarks: its start, the end
//! of the live elements, and the end of the allocated slots. Everything the
//! vector does is bookkeeping on those three positions plus raw reads, writes
//! and bitwise moves of elements.
//!
//! ```
//! use growvec_core::Vector;
//!
//! let mut v = Vector::new();
//! assert_eq!(v.capacity(), 0);
//!
//! v.push(1);
//! v.push(2);
//! v.push(3);
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.capacity(), 4);
//! assert_eq!(v.remaining(), 1);
//!
//! v.insert(0, 0).unwrap();
//! assert_eq!(v, [0, 1, 2, 3]);
//! assert!(v.at(4).is_err());
//! ```
//!
//! The allocator is a capability injected at construction. Any
//! `allocator_api2` allocator works, including a `bumpalo` arena:
//!
//! ```
//! use bumpalo::Bump;
//! use growvec_core::Vector;
//!
//! let arena = Bump::new();
//! let mut v = Vector::new_in(&arena);
//! v.extend([1, 2, 3]);
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(unsafe_code)]

// This works on std and no_std and is harmless.
extern crate alloc;

mod macros;

pub mod cursor;
pub mod error;
pub mod iter;
mod raw;
pub mod vec;

pub use allocator_api2::alloc::{AllocError, Allocator, Global};
pub use cursor::{Cursor, CursorMut, Direction};
pub use error::Error;
pub use iter::{IntoIter, Iter, IterMut};
pub use vec::Vector;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(Vector<u8>, [usize; 3]);
static_assertions::assert_impl_all!(Vector<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Vector<core::cell::Cell<i32>>: Sync);
static_assertions::assert_impl_all!(Iter<'static, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(IterMut<'static, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(Iter<'static, core::cell::Cell<i32>>: Send, Sync);

/// Test utilities for logging and allocation accounting.
#[cfg(test)]
pub mod test_utils {
    use core::alloc::Layout;
    use core::cell::Cell;
    use core::ptr::NonNull;
    use std::rc::Rc;

    use allocator_api2::alloc::{AllocError, Allocator, Global};

    /// Runs `f` with a thread-local subscriber that records events at every
    /// level and returns the formatted output.
    pub fn capture_logs(f: impl FnOnce()) -> String {
        use std::sync::{Arc, Mutex};
        use tracing_subscriber::util::SubscriberInitExt;

        #[derive(Clone, Default)]
        struct Buffer(Arc<Mutex<Vec<u8>>>);

        impl std::io::Write for Buffer {
            fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(bytes);
                Ok(bytes.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        {
            let _guard = subscriber.set_default();
            f();
        }
        let bytes = buffer.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[derive(Default)]
    struct Stats {
        allocations: Cell<usize>,
        deallocations: Cell<usize>,
        live_bytes: Cell<usize>,
        limit: Cell<Option<usize>>,
    }

    /// Global-backed allocator that counts what it hands out.
    ///
    /// Clones share the same counters, so a test can keep one handle while
    /// the vector owns another.
    #[derive(Clone, Default)]
    pub struct TrackingAlloc {
        stats: Rc<Stats>,
    }

    impl TrackingAlloc {
        /// Refuses any allocation that would push live bytes past `bytes`.
        pub fn with_limit(bytes: usize) -> Self {
            let alloc = Self::default();
            alloc.stats.limit.set(Some(bytes));
            alloc
        }

        pub fn allocations(&self) -> usize {
            self.stats.allocations.get()
        }

        pub fn deallocations(&self) -> usize {
            self.stats.deallocations.get()
        }

        pub fn live_blocks(&self) -> usize {
            self.allocations() - self.deallocations()
        }

        pub fn live_bytes(&self) -> usize {
            self.stats.live_bytes.get()
        }
    }

    unsafe impl Allocator for TrackingAlloc {
        fn allocate(&self, layout: Layout) -> Result<NonNull<[u8]>, AllocError> {
            let live = self.stats.live_bytes.get();
            if let Some(limit) = self.stats.limit.get() {
                if live + layout.size() > limit {
                    return Err(AllocError);
                }
            }
            let block = Global.allocate(layout)?;
            self.stats.allocations.set(self.stats.allocations.get() + 1);
            self.stats.live_bytes.set(live + layout.size());
            Ok(block)
        }

        unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
            unsafe { Global.deallocate(ptr, layout) };
            self.stats.deallocations.set(self.stats.deallocations.get() + 1);
            self.stats
                .live_bytes
                .set(self.stats.live_bytes.get() - layout.size());
        }
    }
}
