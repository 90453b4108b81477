/// The echo pipeline: scan flags, pick the destination, convert, write.
use std::ffi::OsString;
use std::io::Write;

use tracing::{debug, warn};

use super::convert::native_to_utf8;
use super::errors::EchoError;
use super::flags;
use crate::cli::Output;
use crate::cli::output::{UTF8_BOM, write_best_effort};

/// Echo `args` (program name excluded) to `out`.
///
/// A `-out <PATH>` pair redirects `out` before anything is written. Fatal
/// errors are returned untouched so the caller can report them to whatever
/// destination is current at that point.
///
/// # Errors
///
/// Returns `EchoError` for flag errors, an unopenable redirect target or an
/// allocation failure during conversion.
pub fn run(args: Vec<OsString>, out: &mut Output) -> Result<(), EchoError> {
    let invocation = flags::scan(args)?;

    if let Some(path) = &invocation.out_path {
        out.redirect_to(path)?;
    }

    let lines = convert_all(&invocation.payload)?;
    let bom = !out.is_console();
    emit(out, &lines, bom);
    Ok(())
}

/// Convert every payload argument up front. Arguments that are not valid in
/// their native encoding are dropped.
fn convert_all(payload: &[OsString]) -> Result<Vec<String>, EchoError> {
    let mut lines = Vec::new();
    lines
        .try_reserve_exact(payload.len())
        .map_err(|_| EchoError::OutOfMemory)?;

    for (index, arg) in payload.iter().enumerate() {
        match native_to_utf8(arg)? {
            Some(line) => lines.push(line),
            None => warn!(index, arg = ?arg, "argument is not valid text; skipping"),
        }
    }
    Ok(lines)
}

/// Write the optional BOM, then each line followed by `\n`.
pub fn emit<W: Write + ?Sized>(out: &mut W, lines: &[String], bom: bool) {
    if bom {
        write_best_effort(out, UTF8_BOM);
    }
    for line in lines {
        write_best_effort(out, line.as_bytes());
        write_best_effort(out, b"\n");
    }
    debug!(count = lines.len(), bom, "echo complete");
}
