//! JSON output of the dependency map

use std::io::{self, Write};

use crate::deps::DependencyMap;
use crate::error::{Error, Result};

/// Write the dependency map as pretty-printed JSON, keys in insertion order.
pub fn write_json<W: Write>(deps: &DependencyMap, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, deps)?;
    writeln!(out).map_err(|e| Error::io("<stdout>", e))?;
    Ok(())
}

/// Print the dependency map as pretty-printed JSON to stdout.
pub fn print_json(deps: &DependencyMap) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_json(deps, &mut lock)
}
