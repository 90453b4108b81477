/// Output sink: the single active destination, the write loop and error
/// rendering.
use std::fs::{File, OpenOptions};
use std::io::{self, Stdout, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::console;
use crate::echo::EchoError;

/// UTF-8 byte-order mark, written ahead of redirected output.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Prefix for fatal error messages.
const ERROR_PREFIX: &str = "[ERROR]: ";

/// Where echoed bytes go.
#[derive(Debug)]
enum Destination {
    Stdout(Stdout),
    File(File),
}

/// The one active output destination for the process.
///
/// Starts as standard output. [`Output::redirect_to`] swaps in a file and
/// closes whatever was there before. Dropping the `Output` flushes it.
#[derive(Debug)]
pub struct Output {
    dest: Destination,
}

impl Output {
    /// Output bound to the process's standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            dest: Destination::Stdout(io::stdout()),
        }
    }

    /// Open `path` for exclusive writing, truncating it, and make it the
    /// destination. The previous destination is dropped.
    ///
    /// # Errors
    ///
    /// Returns `EchoError::OpenOutput` if the file cannot be opened; the
    /// current destination is left in place.
    pub fn redirect_to(&mut self, path: &Path) -> Result<(), EchoError> {
        let file = open_exclusive(path).map_err(|source| EchoError::OpenOutput {
            path: path.to_owned(),
            source,
        })?;
        info!(path = %path.display(), "redirecting output");
        self.flush_quietly();
        self.dest = Destination::File(file);
        Ok(())
    }

    /// Whether the destination is an interactive terminal.
    #[must_use]
    pub fn is_console(&self) -> bool {
        match &self.dest {
            Destination::Stdout(out) => console::is_console(out),
            Destination::File(file) => console::is_console(file),
        }
    }

    fn flush_quietly(&mut self) {
        if let Err(err) = self.flush() {
            debug!(%err, "flush failed");
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.dest {
            Destination::Stdout(out) => out.write(buf),
            Destination::File(file) => file.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.dest {
            Destination::Stdout(out) => out.flush(),
            Destination::File(file) => file.flush(),
        }
    }
}

impl Drop for Output {
    fn drop(&mut self) {
        self.flush_quietly();
    }
}

#[cfg(windows)]
fn open_exclusive(path: &Path) -> io::Result<File> {
    use std::os::windows::fs::OpenOptionsExt;

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .share_mode(0)
        .open(path)
}

#[cfg(not(windows))]
fn open_exclusive(path: &Path) -> io::Result<File> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
}

/// Write all of `bytes` to `out`, issuing as many `write` calls as needed.
///
/// A failed or zero-length write abandons the rest of `bytes` without
/// reporting it. `Interrupted` is retried.
pub fn write_best_effort<W: Write + ?Sized>(out: &mut W, bytes: &[u8]) {
    let mut written = 0;
    while written < bytes.len() {
        match out.write(&bytes[written..]) {
            Ok(0) => {
                warn!(written, total = bytes.len(), "write made no progress; abandoning");
                return;
            }
            Ok(n) => written += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => {
                warn!(%err, written, total = bytes.len(), "write failed; abandoning");
                return;
            }
        }
    }
}

/// Write a fatal error as `[ERROR]: <message>` to the current destination.
pub fn write_error(out: &mut Output, err: &EchoError) {
    let line = format!("{ERROR_PREFIX}{err}\n");
    write_best_effort(out, line.as_bytes());
    out.flush_quietly();
}
