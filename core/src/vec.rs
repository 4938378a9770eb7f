//! The [`Vector`] container.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::mem::{self, ManuallyDrop};
use core::ops::{
    Bound, Deref, DerefMut, Index, IndexMut, Range, RangeBounds, RangeFrom, RangeFull,
    RangeInclusive, RangeTo, RangeToInclusive,
};
use core::ptr;
use core::slice;

use allocator_api2::alloc::{Allocator, Global};

use crate::cursor::{Cursor, CursorMut, Direction};
use crate::error::{Error, handle_error};
use crate::iter::{IntoIter, Iter, IterMut};
use crate::raw::RawBlock;

/// A contiguous growable array with a pluggable allocator.
///
/// The live elements occupy slots `[0, len())` of the owned block; slots
/// `[len(), capacity())` are allocated but uninitialized. No memory is
/// allocated until an element needs a slot.
///
/// Appending into a full vector reallocates to twice the current length
/// (one slot for the very first element). Reallocation always goes through
/// a fresh block: live elements are moved over and the old block is released.
pub struct Vector<T, A: Allocator = Global> {
    buf: RawBlock<T, A>,
    len: usize,
}

impl<T> Vector<T> {
    /// Creates an empty vector on the global heap without allocating.
    pub const fn new() -> Self {
        Self::new_in(Global)
    }

    /// Creates an empty vector with exactly `slots` slots allocated.
    pub fn with_capacity(slots: usize) -> Self {
        Self::with_capacity_in(slots, Global)
    }
}

impl<T, A: Allocator> Vector<T, A> {
    /// Creates an empty vector that will allocate from `alloc`.
    pub const fn new_in(alloc: A) -> Self {
        Self {
            buf: RawBlock::new_in(alloc),
            len: 0,
        }
    }

    /// Creates an empty vector with exactly `slots` slots allocated from
    /// `alloc`.
    pub fn with_capacity_in(slots: usize, alloc: A) -> Self {
        match RawBlock::try_with_capacity_in(slots, alloc) {
            Ok(buf) => Self { buf, len: 0 },
            Err(error) => handle_error(error),
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of allocated slots, live or free.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Number of elements that can still be appended without reallocating.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.capacity() - self.len
    }

    /// Largest number of elements a single block can hold.
    pub const fn max_len(&self) -> usize {
        isize::MAX as usize / mem::size_of::<T>()
    }

    /// The allocator this vector draws its block from.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// Raw pointer to the start of the block.
    ///
    /// The pointer is dangling while nothing is allocated and is invalidated
    /// by any call that reallocates.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.ptr()
    }

    /// Mutable counterpart of [`as_ptr`](Self::as_ptr).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.ptr()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` is initialized; the pointer is aligned and
        // non-null even when nothing is allocated.
        unsafe { slice::from_raw_parts(self.buf.ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` makes the borrow unique.
        unsafe { slice::from_raw_parts_mut(self.buf.ptr(), self.len) }
    }

    /// Bounds-checked access.
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.check_index(index)?;
        // SAFETY: `index < len`.
        Ok(unsafe { &*self.buf.ptr().add(index) })
    }

    /// Bounds-checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.check_index(index)?;
        // SAFETY: `index < len`.
        Ok(unsafe { &mut *self.buf.ptr().add(index) })
    }

    /// First element, or `None` when empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Last element, or `None` when empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Appends an element, growing the block if it is full.
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.capacity() {
            self.grow_one();
        }
        // SAFETY: `len < capacity` after growing.
        unsafe { self.push_unchecked(value) };
    }

    /// Grows if needed, then constructs the element from `f` directly in the
    /// next free slot and returns it.
    pub fn emplace_back<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len == self.buf.capacity() {
            self.grow_one();
        }
        // SAFETY: `len < capacity` after growing; `len` is only bumped once
        // the slot holds a value.
        unsafe {
            let slot = self.buf.ptr().add(self.len);
            slot.write(f());
            self.len += 1;
            &mut *slot
        }
    }

    /// Removes the last element. Does nothing on an empty vector.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot at the old `len - 1` is initialized and no longer
        // counted as live.
        Some(unsafe { ptr::read(self.buf.ptr().add(self.len)) })
    }

    /// Makes room for at least `additional` more elements.
    ///
    /// When fewer slots are free, the block is reallocated to hold exactly
    /// `len() + additional` elements.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(error) = self.try_reserve(additional) {
            handle_error(error);
        }
    }

    /// Fallible [`reserve`](Self::reserve). On error the vector is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), Error> {
        if self.remaining() >= additional {
            return Ok(());
        }
        let slots = self
            .len
            .checked_add(additional)
            .ok_or(Error::CapacityOverflow)?;
        self.try_relocate(slots, self.len, 0)
    }

    /// Reallocates to exactly `new_len` slots, keeping the first
    /// `min(len, new_len)` elements and filling the rest with `T::default()`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Like [`resize`](Self::resize), filling new slots with values from `f`.
    ///
    /// The block is always replaced, even when the length does not change.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        self.truncate(new_len);
        self.relocate(new_len, self.len, 0);
        while self.len < new_len {
            // SAFETY: the block has exactly `new_len` slots.
            unsafe { self.push_unchecked(f()) };
        }
    }

    /// Drops the elements past `new_len`. Never reallocates.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        // SAFETY: `[new_len, len)` is initialized; shrinking `len` first means
        // a panicking destructor cannot cause a double drop.
        unsafe {
            let tail = self.buf.ptr().add(new_len);
            let tail = ptr::slice_from_raw_parts_mut(tail, self.len - new_len);
            self.len = new_len;
            ptr::drop_in_place(tail);
        }
    }

    /// Releases every free slot: the block is reallocated to exactly
    /// `len()` slots, or released altogether when empty.
    pub fn shrink_to_fit(&mut self) {
        if self.buf.capacity() > self.len {
            self.relocate(self.len, self.len, 0);
        }
    }

    /// Drops all elements and releases the block.
    pub fn clear(&mut self) {
        self.truncate(0);
        self.buf.release();
    }

    /// Moves the contents out, leaving `self` empty and unallocated.
    pub fn take(&mut self) -> Self
    where
        A: Clone,
    {
        let alloc = self.buf.allocator().clone();
        mem::replace(self, Self::new_in(alloc))
    }

    /// Exchanges the blocks of two vectors. No element is touched.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Inserts `value` before position `index`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        self.emplace(index, move || value).map(|_| ())
    }

    /// Inserts `count` clones of `value` before position `index`.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_iter(index, iter::repeat_n(value, count))
    }

    /// Inserts clones of `items`, in order, before position `index`.
    pub fn insert_slice(&mut self, index: usize, items: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        self.insert_iter(index, items.iter().cloned())
    }

    /// Inserts the values of an exact-size iterator before position `index`.
    ///
    /// Inserting at `len()` appends one value at a time. Anywhere else the
    /// suffix is shifted once to open a gap of `len()` of the iterator; if the
    /// free slots do not suffice, the block is replaced by one holding exactly
    /// the combined elements.
    pub fn insert_iter<I>(&mut self, index: usize, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.check_position(index)?;
        let values = values.into_iter();
        if index == self.len {
            for value in values {
                self.push(value);
            }
            return Ok(());
        }

        let count = values.len();
        if count == 0 {
            return Ok(());
        }

        // SAFETY: `index < len`. The gap `[index, index + count)` is filled
        // before `len` is restored; an iterator yielding fewer items than it
        // promised has the rest of the gap closed again.
        unsafe {
            let old_len = self.open_gap(index, count);
            let base = self.buf.ptr().add(index);
            let mut written = 0;
            for value in values.take(count) {
                base.add(written).write(value);
                written += 1;
            }
            if written < count {
                ptr::copy(base.add(count), base.add(written), old_len - index);
            }
            self.len = old_len + written;
        }
        Ok(())
    }

    /// Constructs an element from `f` directly in the slot before position
    /// `index` and returns it.
    pub fn emplace<F>(&mut self, index: usize, f: F) -> Result<&mut T, Error>
    where
        F: FnOnce() -> T,
    {
        self.check_position(index)?;
        if index == self.len {
            return Ok(self.emplace_back(f));
        }
        // SAFETY: `index < len`; the gap slot is written before `len` is
        // restored.
        unsafe {
            let old_len = self.open_gap(index, 1);
            let slot = self.buf.ptr().add(index);
            slot.write(f());
            self.len = old_len + 1;
            Ok(&mut *slot)
        }
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    pub fn erase(&mut self, index: usize) -> Result<T, Error> {
        self.check_index(index)?;
        // SAFETY: `index < len`; the read value is replaced by the shifted
        // suffix before `len` shrinks.
        unsafe {
            let slot = self.buf.ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            Ok(value)
        }
    }

    /// Drops the elements in `range` and closes the hole by shifting the
    /// suffix left.
    pub fn erase_range<R>(&mut self, range: R) -> Result<(), Error>
    where
        R: RangeBounds<usize>,
    {
        let (start, end) = self.resolve_range(range)?;
        if start == end {
            return Ok(());
        }
        let old_len = self.len;
        // SAFETY: `start < end <= len`. While the erased elements drop, `len`
        // excludes them and the suffix, so a panic only leaks.
        unsafe {
            let base = self.buf.ptr().add(start);
            self.len = start;
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(base, end - start));
            ptr::copy(self.buf.ptr().add(end), base, old_len - end);
        }
        self.len = old_len - (end - start);
        Ok(())
    }

    /// Replaces the contents with clones of `items`.
    ///
    /// The block is kept when it is large enough, otherwise it is replaced by
    /// one of exactly `items.len()` slots.
    pub fn assign(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.truncate(0);
        if self.buf.capacity() < items.len() {
            self.relocate(items.len(), 0, 0);
        }
        for item in items {
            // SAFETY: capacity was ensured above.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }

    /// Borrowing iterator over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Mutably borrowing iterator over the live elements.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Cursor on the first element.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0, Direction::Forward)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len, Direction::Forward)
    }

    /// Reverse cursor on the last element.
    pub fn rbegin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0, Direction::Reverse)
    }

    /// Reverse cursor one before the first element.
    pub fn rend(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len, Direction::Reverse)
    }

    /// Mutable cursor on the first element.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0, Direction::Forward)
    }

    /// Mutable reverse cursor on the last element.
    pub fn rbegin_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice(), 0, Direction::Reverse)
    }

    /// # Safety
    ///
    /// `len < capacity`.
    #[inline(always)]
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.buf.capacity());
        unsafe { self.buf.ptr().add(self.len).write(value) };
        self.len += 1;
    }

    #[cold]
    fn grow_one(&mut self) {
        self.grow_amortized(1);
    }

    /// Grows to `max(2 * len, len + additional)` slots, so a first element
    /// gets exactly one slot and appends into a full block double it.
    fn grow_amortized(&mut self, additional: usize) {
        let needed = match self.len.checked_add(additional) {
            Some(needed) => needed,
            None => handle_error(Error::CapacityOverflow),
        };
        let doubled = self.len.saturating_mul(2);
        self.relocate(needed.max(doubled), self.len, 0);
    }

    fn try_relocate(&mut self, slots: usize, at: usize, gap: usize) -> Result<(), Error> {
        // SAFETY: callers keep `at <= len` and `len + gap <= slots`.
        unsafe { self.buf.try_relocate(self.len, slots, at, gap) }
    }

    fn relocate(&mut self, slots: usize, at: usize, gap: usize) {
        if let Err(error) = self.try_relocate(slots, at, gap) {
            handle_error(error);
        }
    }

    /// Opens `count` uninitialized slots at `index` and returns the old
    /// length. On return `len == index`: the shifted suffix is owned by the
    /// caller until it restores `len`.
    ///
    /// # Safety
    ///
    /// `index <= len`.
    unsafe fn open_gap(&mut self, index: usize, count: usize) -> usize {
        let old_len = self.len;
        if self.remaining() < count {
            let slots = match old_len.checked_add(count) {
                Some(slots) => slots,
                None => handle_error(Error::CapacityOverflow),
            };
            self.relocate(slots, index, count);
        } else {
            unsafe {
                let slot = self.buf.ptr().add(index);
                ptr::copy(slot, slot.add(count), old_len - index);
            }
        }
        self.len = index;
        old_len
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.len {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn check_position(&self, index: usize) -> Result<(), Error> {
        if index <= self.len {
            Ok(())
        } else {
            Err(Error::OutOfRange {
                index,
                len: self.len,
            })
        }
    }

    fn resolve_range<R: RangeBounds<usize>>(&self, range: R) -> Result<(usize, usize), Error> {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => start.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => end.saturating_add(1),
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        if start > end || end > self.len {
            return Err(Error::InvalidRange {
                start,
                end,
                len: self.len,
            });
        }
        Ok((start, end))
    }

    pub(crate) fn into_raw_parts(self) -> (RawBlock<T, A>, usize) {
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so the block is moved out exactly
        // once.
        (unsafe { ptr::read(&this.buf) }, this.len)
    }
}

impl<T: Clone> Vector<T> {
    /// A vector holding `count` clones of `value`.
    pub fn from_elem(value: T, count: usize) -> Self {
        let mut v = Self::with_capacity(count);
        v.extend(iter::repeat_n(value, count));
        v
    }
}

impl<T, A: Allocator> Drop for Vector<T, A> {
    fn drop(&mut self) {
        // SAFETY: `[0, len)` is initialized. The block itself is released
        // when `buf` drops.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.buf.ptr(), self.len));
        }
    }
}

impl<T: Clone, A: Allocator + Clone> Clone for Vector<T, A> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity_in(self.len, self.buf.allocator().clone());
        for item in self.iter() {
            // SAFETY: `copy` has exactly `self.len` slots.
            unsafe { copy.push_unchecked(item.clone()) };
        }
        copy
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Vector<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, A: Allocator> Deref for Vector<T, A> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> DerefMut for Vector<T, A> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> AsRef<[T]> for Vector<T, A> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, A: Allocator> AsMut<[T]> for Vector<T, A> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, A: Allocator> Index<usize> for Vector<T, A> {
    type Output = T;

    /// Panics with [`Error::OutOfRange`] when `index >= len()`.
    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T, A: Allocator> IndexMut<usize> for Vector<T, A> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}

// Ranges index the live elements as a slice.
macro_rules! impl_range_index {
    ($($range:ty),* $(,)?) => {
        $(
            impl<T, A: Allocator> Index<$range> for Vector<T, A> {
                type Output = [T];

                #[track_caller]
                fn index(&self, range: $range) -> &[T] {
                    &self.as_slice()[range]
                }
            }

            impl<T, A: Allocator> IndexMut<$range> for Vector<T, A> {
                #[track_caller]
                fn index_mut(&mut self, range: $range) -> &mut [T] {
                    &mut self.as_mut_slice()[range]
                }
            }
        )*
    };
}

impl_range_index!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeFull,
    RangeInclusive<usize>,
    RangeToInclusive<usize>,
);

impl<T, A: Allocator> Extend<T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let additional = iter.size_hint().0;
        if self.remaining() < additional {
            self.grow_amortized(additional);
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a, A: Allocator> Extend<&'a T> for Vector<T, A> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T> {
    fn from(values: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for value in values {
            // SAFETY: exactly `N` slots were allocated.
            unsafe { v.push_unchecked(value) };
        }
        v
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(values: &[T]) -> Self {
        let mut v = Self::new();
        v.assign(values);
        v
    }
}

impl<T, A: Allocator> IntoIterator for Vector<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();
        IntoIter::new(buf, len)
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Vector<T, A> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Vector<T, A> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, U, A1: Allocator, A2: Allocator> PartialEq<Vector<U, A2>> for Vector<T, A1>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, A2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<[U]> for Vector<T, A> {
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq<U>, U, A: Allocator> PartialEq<&[U]> for Vector<T, A> {
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: PartialEq<U>, U, A: Allocator, const N: usize> PartialEq<[U; N]> for Vector<T, A> {
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Eq, A: Allocator> Eq for Vector<T, A> {}

impl<T: PartialOrd, A: Allocator> PartialOrd for Vector<T, A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, A: Allocator> Ord for Vector<T, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, A: Allocator> Hash for Vector<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

#[cfg(test)]
#[path = "vec_test.rs"]
mod vec_test;
