//! Position-based cursors over a [`Vector`](crate::Vector).
//!
//! A cursor is a position in `[0, len]` plus a direction. Position `len` is
//! the end position and refers to no element. A forward cursor at position
//! `p` refers to element `p`; a reverse cursor at position `p` refers to
//! element `len - 1 - p`, so stepping forward walks the vector back to front.
//!
//! ```text
//!  forward:   0   1   2   3 (end)
//!           [ a | b | c ]
//!  reverse:   2   1   0       3 (end, before `a`)
//! ```
//!
//! Cursors borrow the vector. Anything that could reallocate needs
//! `&mut Vector`, so a cursor can never outlive the block it points into.

use core::fmt;
use core::ptr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Forward => Direction::Reverse,
            Direction::Reverse => Direction::Forward,
        }
    }
}

/// Maps a cursor position to the element it refers to.
#[inline(always)]
fn element_index(pos: usize, len: usize, direction: Direction) -> Option<usize> {
    if pos >= len {
        return None;
    }
    match direction {
        Direction::Forward => Some(pos),
        Direction::Reverse => Some(len - 1 - pos),
    }
}

/// Read-only cursor, created by [`Vector::begin`], [`Vector::end`],
/// [`Vector::rbegin`] and [`Vector::rend`].
///
/// [`Vector::begin`]: crate::Vector::begin
/// [`Vector::end`]: crate::Vector::end
/// [`Vector::rbegin`]: crate::Vector::rbegin
/// [`Vector::rend`]: crate::Vector::rend
pub struct Cursor<'a, T> {
    slice: &'a [T],
    pos: usize,
    direction: Direction,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(slice: &'a [T], pos: usize, direction: Direction) -> Self {
        debug_assert!(pos <= slice.len());
        Self {
            slice,
            pos,
            direction,
        }
    }

    /// The element under the cursor, `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        let index = self.index()?;
        self.slice.get(index)
    }

    /// Index of the element under the cursor, `None` at the end position.
    pub fn index(&self) -> Option<usize> {
        element_index(self.pos, self.slice.len(), self.direction)
    }

    /// Steps in the cursor's direction. Returns `false`, without moving, at
    /// the end position.
    pub fn move_next(&mut self) -> bool {
        if self.pos < self.slice.len() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Steps against the cursor's direction. Returns `false`, without
    /// moving, at the first position.
    pub fn move_prev(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    /// Returns a copy moved one step forward, like a post-increment.
    pub fn next_cursor(&self) -> Self {
        let mut next = *self;
        next.move_next();
        next
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.slice.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flips the direction, keeping the boundary the cursor sits on.
    ///
    /// A forward cursor on element `i` becomes a reverse cursor on element
    /// `i - 1`, and the end of one direction becomes the start of the other.
    /// Reversing twice yields the original cursor.
    pub fn reverse(self) -> Self {
        Self {
            slice: self.slice,
            pos: self.slice.len() - self.pos,
            direction: self.direction.flip(),
        }
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.slice.as_ptr(), other.slice.as_ptr())
            && self.slice.len() == other.slice.len()
            && self.direction == other.direction
            && self.pos == other.pos
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("pos", &self.pos)
            .field("direction", &self.direction)
            .field("current", &self.get())
            .finish()
    }
}

/// Mutable cursor, created by [`Vector::begin_mut`] and
/// [`Vector::rbegin_mut`].
///
/// [`Vector::begin_mut`]: crate::Vector::begin_mut
/// [`Vector::rbegin_mut`]: crate::Vector::rbegin_mut
pub struct CursorMut<'a, T> {
    slice: &'a mut [T],
    pos: usize,
    direction: Direction,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(slice: &'a mut [T], pos: usize, direction: Direction) -> Self {
        debug_assert!(pos <= slice.len());
        Self {
            slice,
            pos,
            direction,
        }
    }

    pub fn get(&self) -> Option<&T> {
        let index = self.index()?;
        self.slice.get(index)
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.index()?;
        self.slice.get_mut(index)
    }

    pub fn index(&self) -> Option<usize> {
        element_index(self.pos, self.slice.len(), self.direction)
    }

    pub fn move_next(&mut self) -> bool {
        if self.pos < self.slice.len() {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub fn move_prev(&mut self) -> bool {
        if self.pos > 0 {
            self.pos -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_end(&self) -> bool {
        self.pos == self.slice.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// See [`Cursor::reverse`].
    pub fn reverse(self) -> Self {
        let pos = self.slice.len() - self.pos;
        Self {
            slice: self.slice,
            pos,
            direction: self.direction.flip(),
        }
    }

    /// A read-only cursor at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.slice, self.pos, self.direction)
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("pos", &self.pos)
            .field("direction", &self.direction)
            .field("current", &self.get())
            .finish()
    }
}
