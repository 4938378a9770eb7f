//! The `grow` command - append values and watch the block double.

use std::io::{self, Write};

use bumpalo::Bump;
use growvec::{Allocator, Global, Vector};

use crate::cli::GrowArgs;
use crate::common::{CliResult, report};

/// Run the grow command.
pub fn run(args: GrowArgs) -> CliResult<()> {
    tracing::debug!(count = args.count, at = ?args.at, arena = args.arena, "grow");
    let mut stdout = io::stdout().lock();
    if args.arena {
        let arena = Bump::new();
        drive(&args, &arena, &mut stdout)
    } else {
        drive(&args, Global, &mut stdout)
    }
}

/// Appends `0..count`, reporting storage before each append and once at the
/// end, then reads the element at `--at` if one was given.
pub fn drive<A: Allocator>(args: &GrowArgs, alloc: A, out: &mut impl Write) -> CliResult<()> {
    let mut v = Vector::new_in(alloc);
    for value in 0..args.count {
        report::storage(out, &v)?;
        v.push(value);
    }
    report::storage(out, &v)?;

    if let Some(index) = args.at {
        let value = v.at(index)?;
        writeln!(out, "at({index}) = {value}")?;
    }
    Ok(())
}
