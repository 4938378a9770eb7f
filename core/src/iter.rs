//! Iterators over a [`Vector`](crate::Vector).
//!
//! `Iter` and `IterMut` wrap the slice iterators over the live elements.
//! `IntoIter` owns the block and walks a half-open `[ptr, end)` pointer
//! range from either side.

use core::fmt;
use core::iter::FusedIterator;
use core::ptr;
use core::slice;

use allocator_api2::alloc::{Allocator, Global};

use crate::raw::RawBlock;

/// Number of elements in `[start, end)`.
///
/// # Safety
///
/// Both pointers must lie in the same block with `start <= end`.
#[inline(always)]
unsafe fn distance<T>(start: *const T, end: *const T) -> usize {
    unsafe { end.offset_from(start) as usize }
}

/// Borrowing iterator, created by [`Vector::iter`](crate::Vector::iter).
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slice: &'a [T]) -> Self {
        Self {
            inner: slice.iter(),
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &'a [T] {
        self.inner.as_slice()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a T> {
        self.inner.nth(n)
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.as_slice()).finish()
    }
}

/// Mutably borrowing iterator, created by
/// [`Vector::iter_mut`](crate::Vector::iter_mut).
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T]) -> Self {
        Self {
            inner: slice.iter_mut(),
        }
    }

    /// Consumes the iterator, returning the elements not yet yielded.
    pub fn into_slice(self) -> &'a mut [T] {
        self.inner.into_slice()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<&'a mut T> {
        self.inner.nth(n)
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut").field(&self.inner.as_slice()).finish()
    }
}

/// Owning iterator, created by `Vector::into_iter`.
///
/// Unyielded elements are dropped and the block is released when the
/// iterator goes away.
pub struct IntoIter<T, A: Allocator = Global> {
    buf: RawBlock<T, A>,
    ptr: *const T,
    end: *const T,
}

impl<T, A: Allocator> IntoIter<T, A> {
    pub(crate) fn new(buf: RawBlock<T, A>, len: usize) -> Self {
        let ptr = buf.ptr().cast_const();
        // SAFETY: `len` does not exceed the block.
        let end = unsafe { ptr.add(len) };
        Self { buf, ptr, end }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr, self.len()) }
    }

    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }
}

impl<T, A: Allocator> Iterator for IntoIter<T, A> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if ptr::eq(self.ptr, self.end) {
            return None;
        }
        // SAFETY: the element is moved out and the cursor moves past it, so
        // it is never read or dropped again.
        unsafe {
            let item = ptr::read(self.ptr);
            self.ptr = self.ptr.add(1);
            Some(item)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = unsafe { distance(self.ptr, self.end) };
        (len, Some(len))
    }
}

impl<T, A: Allocator> DoubleEndedIterator for IntoIter<T, A> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if ptr::eq(self.ptr, self.end) {
            return None;
        }
        unsafe {
            self.end = self.end.sub(1);
            Some(ptr::read(self.end))
        }
    }
}

impl<T, A: Allocator> ExactSizeIterator for IntoIter<T, A> {}

// SAFETY: the iterator owns its elements and block like the vector did.
unsafe impl<T: Send, A: Allocator + Send> Send for IntoIter<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for IntoIter<T, A> {}
impl<T, A: Allocator> FusedIterator for IntoIter<T, A> {}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for IntoIter<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, A: Allocator> Drop for IntoIter<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[ptr, end)` still holds live elements. `buf` releases the
        // block afterwards.
        unsafe {
            let rest = ptr::slice_from_raw_parts_mut(self.ptr.cast_mut(), self.len());
            ptr::drop_in_place(rest);
        }
    }
}
