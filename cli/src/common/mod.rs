//! Common utilities shared across CLI commands.

pub mod error;
pub mod report;

pub use error::CliResult;
