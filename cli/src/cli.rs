//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use clap::{Args, Parser, Subcommand};

/// growvec - drive a hand-built growable vector and watch its storage
#[derive(Parser, Debug)]
#[command(name = "growvec", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Append values one at a time, reporting storage before each append
    Grow(GrowArgs),

    /// Insert in the middle and at the end, then resize
    Splice(SpliceArgs),
}

/// Arguments for the `grow` command.
#[derive(Args, Debug)]
pub struct GrowArgs {
    /// Number of values to append
    #[arg(long, default_value_t = 100)]
    pub count: u64,

    /// Read the element at this index afterwards, with bounds checking
    #[arg(long)]
    pub at: Option<usize>,

    /// Allocate from a bump arena instead of the global heap
    #[arg(long)]
    pub arena: bool,
}

/// Arguments for the `splice` command.
#[derive(Args, Debug)]
pub struct SpliceArgs {
    /// Length to resize to once the insertions are done
    #[arg(long, default_value_t = 31)]
    pub resize: usize,

    /// Allocate from a bump arena instead of the global heap
    #[arg(long)]
    pub arena: bool,
}
