//! Storage report lines shared by the drivers.

use std::io::{self, Write};

use growvec::{Allocator, Vector};

/// Writes `capacity: C, size: S, free: F` for `v`.
pub fn storage<T, A: Allocator>(out: &mut impl Write, v: &Vector<T, A>) -> io::Result<()> {
    writeln!(
        out,
        "capacity: {}, size: {}, free: {}",
        v.capacity(),
        v.len(),
        v.remaining()
    )
}
