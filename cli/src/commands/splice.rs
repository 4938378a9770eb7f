//! The `splice` command - insert at the front and the back, then resize.

use std::io::{self, Write};

use bumpalo::Bump;
use growvec::{Allocator, Global, Vector};

use crate::cli::SpliceArgs;
use crate::common::{CliResult, report};

/// Run the splice command.
pub fn run(args: SpliceArgs) -> CliResult<()> {
    tracing::debug!(resize = args.resize, arena = args.arena, "splice");
    let mut stdout = io::stdout().lock();
    if args.arena {
        let arena = Bump::new();
        drive(&args, &arena, &mut stdout)
    } else {
        drive(&args, Global, &mut stdout)
    }
}

pub fn drive<A: Allocator>(args: &SpliceArgs, alloc: A, out: &mut impl Write) -> CliResult<()> {
    let mut v: Vector<i32, A> = Vector::new_in(alloc);
    v.insert_slice(0, &[1, 2, 3, 4, 5])?;
    v.insert_n(0, 5, 10)?;
    v.insert_n(v.len(), 5, 11)?;
    report::storage(out, &v)?;

    v.resize(args.resize);
    writeln!(out, "{v:?}")?;
    report::storage(out, &v)?;
    Ok(())
}
