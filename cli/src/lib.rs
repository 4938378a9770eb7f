//! growvec CLI library.
//!
//! This crate provides the demonstration drivers for the `growvec` container.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
