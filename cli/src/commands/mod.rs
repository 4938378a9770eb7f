//! Command implementations.
//!
//! Each subcommand has its own module with a `run` function that picks the
//! allocator and a `drive` function that does the work for any allocator.

pub mod grow;
pub mod splice;
