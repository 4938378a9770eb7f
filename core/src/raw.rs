//! The owned storage block behind a [`Vector`](crate::Vector).
//!
//! `RawBlock` knows where the block starts, how many slots it has, and which
//! allocator it came from. It never reads, writes or drops elements except to
//! move them bitwise during relocation; element lifetimes are the vector's
//! business.

use core::alloc::Layout;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

use allocator_api2::alloc::Allocator;

use crate::error::Error;

pub(crate) struct RawBlock<T, A: Allocator> {
    // Dangling (but aligned) while `cap == 0`.
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

// SAFETY: the block is uniquely owned; sharing rules follow `T` and `A`.
unsafe impl<T: Send, A: Allocator + Send> Send for RawBlock<T, A> {}
// SAFETY: `&RawBlock` only hands out `*mut T` to code that already holds
// the required borrow of the owning vector.
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBlock<T, A> {}

impl<T, A: Allocator> RawBlock<T, A> {
    /// An unallocated block.
    pub(crate) const fn new_in(alloc: A) -> Self {
        const { assert!(mem::size_of::<T>() != 0, "zero-sized element types are not supported") };
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    pub(crate) fn try_with_capacity_in(slots: usize, alloc: A) -> Result<Self, Error> {
        let mut block = Self::new_in(alloc);
        block.ptr = block.allocate(slots)?;
        block.cap = slots;
        Ok(block)
    }

    #[inline(always)]
    pub(crate) fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    #[inline(always)]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline(always)]
    pub(crate) fn allocator(&self) -> &A {
        &self.alloc
    }

    fn layout(slots: usize) -> Result<Layout, Error> {
        Layout::array::<T>(slots).map_err(|_| Error::CapacityOverflow)
    }

    fn allocate(&self, slots: usize) -> Result<NonNull<T>, Error> {
        if slots == 0 {
            return Ok(NonNull::dangling());
        }
        let layout = Self::layout(slots)?;
        match self.alloc.allocate(layout) {
            Ok(block) => Ok(block.cast()),
            Err(_) => Err(Error::AllocFailed { layout }),
        }
    }

    /// # Safety
    ///
    /// `ptr` must have come from `self.allocate(slots)`.
    unsafe fn deallocate(&self, ptr: NonNull<T>, slots: usize) {
        if slots == 0 {
            return;
        }
        // The layout was valid when the block was allocated.
        if let Ok(layout) = Self::layout(slots) {
            unsafe { self.alloc.deallocate(ptr.cast(), layout) };
        }
    }

    /// Moves `live` elements into a fresh block of `new_cap` slots and
    /// releases the old block.
    ///
    /// Elements `[0, at)` keep their index; elements `[at, live)` land at
    /// `[at + gap, live + gap)`, leaving `gap` uninitialized slots at `at`.
    /// On error nothing has moved and the old block is untouched.
    ///
    /// # Safety
    ///
    /// `[0, live)` must be initialized, `at <= live <= self.capacity()` and
    /// `live + gap <= new_cap`.
    pub(crate) unsafe fn try_relocate(
        &mut self,
        live: usize,
        new_cap: usize,
        at: usize,
        gap: usize,
    ) -> Result<(), Error> {
        debug_assert!(at <= live && live <= self.cap);
        debug_assert!(live + gap <= new_cap);

        let fresh = self.allocate(new_cap)?;
        unsafe {
            ptr::copy_nonoverlapping(self.ptr(), fresh.as_ptr(), at);
            ptr::copy_nonoverlapping(
                self.ptr().add(at),
                fresh.as_ptr().add(at + gap),
                live - at,
            );
        }

        let old = mem::replace(&mut self.ptr, fresh);
        let old_cap = mem::replace(&mut self.cap, new_cap);
        unsafe { self.deallocate(old, old_cap) };

        tracing::debug!(old_slots = old_cap, new_slots = new_cap, live, "relocated block");
        Ok(())
    }

    /// Returns the block to the allocator and goes back to the unallocated
    /// state. Any elements still in the block are forgotten, not dropped.
    pub(crate) fn release(&mut self) {
        let slots = mem::replace(&mut self.cap, 0);
        let old = mem::replace(&mut self.ptr, NonNull::dangling());
        if slots != 0 {
            unsafe { self.deallocate(old, slots) };
            tracing::trace!(slots, "released block");
        }
    }
}

impl<T, A: Allocator> Drop for RawBlock<T, A> {
    fn drop(&mut self) {
        self.release();
    }
}
