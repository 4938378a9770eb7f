//! Error type for fallible vector operations.

use core::alloc::Layout;

use thiserror::Error;

/// Errors reported by [`Vector`](crate::Vector).
///
/// Only the two range variants are raised by ordinary operations. The
/// allocation variants surface through [`Vector::try_reserve`]; every other
/// growth path treats them as fatal.
///
/// [`Vector::try_reserve`]: crate::Vector::try_reserve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// An element index or insertion position is past the live elements.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// An erase range is reversed or extends past the live elements.
    #[error("range {start}..{end} is out of range for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// The requested slot count does not fit in `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator refused to hand out a block.
    #[error("failed to allocate {} bytes", .layout.size())]
    AllocFailed { layout: Layout },
}

impl Error {
    /// Returns `true` for the caller-recoverable range errors.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. } | Error::InvalidRange { .. })
    }
}

/// Aborts on a growth failure from an infallible code path.
#[cold]
pub(crate) fn handle_error(error: Error) -> ! {
    match error {
        Error::AllocFailed { layout } => alloc::alloc::handle_alloc_error(layout),
        other => panic!("{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages() {
        assert_eq!(
            Error::OutOfRange { index: 3, len: 2 }.to_string(),
            "index 3 is out of range for length 2"
        );
        assert_eq!(
            Error::InvalidRange { start: 4, end: 2, len: 5 }.to_string(),
            "range 4..2 is out of range for length 5"
        );
        assert_eq!(Error::CapacityOverflow.to_string(), "capacity overflow");

        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            Error::AllocFailed { layout }.to_string(),
            "failed to allocate 32 bytes"
        );
    }

    #[test]
    fn range_errors_are_recoverable() {
        assert!(Error::OutOfRange { index: 0, len: 0 }.is_out_of_range());
        assert!(Error::InvalidRange { start: 0, end: 1, len: 0 }.is_out_of_range());
        assert!(!Error::CapacityOverflow.is_out_of_range());
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn overflow_is_fatal() {
        handle_error(Error::CapacityOverflow);
    }
}
