/// Platform console layer: code page handling and terminal detection.
pub mod codepage;

use std::io::IsTerminal;

pub use codepage::CodePageGuard;

/// Whether `handle` is an interactive terminal rather than a file or pipe.
///
/// Redirected output gets a UTF-8 byte-order mark; terminals never do.
#[must_use]
pub fn is_console<T: IsTerminal>(handle: &T) -> bool {
    handle.is_terminal()
}
