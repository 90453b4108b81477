/// Console code page switching with guaranteed restore.
use crate::echo::EchoError;

/// Windows code page identifier for UTF-8.
#[cfg(windows)]
pub const CP_UTF8: u32 = 65001;

/// Holds the console in the UTF-8 code page and restores the previous input
/// and output code pages on drop.
///
/// Inert when there is nothing to restore: no console attached, or a
/// platform without console code pages.
#[derive(Debug)]
pub struct CodePageGuard {
    previous: Option<Previous>,
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(not(windows), allow(dead_code))]
struct Previous {
    input: u32,
    output: u32,
}

impl CodePageGuard {
    /// Switch the attached console to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `EchoError::CodePage` if either code page cannot be set. Any
    /// change already made is rolled back before returning.
    #[cfg(windows)]
    pub fn acquire() -> Result<Self, EchoError> {
        use tracing::debug;
        use windows_sys::Win32::System::Console::{
            GetConsoleCP, GetConsoleOutputCP, SetConsoleCP, SetConsoleOutputCP,
        };

        // SAFETY: Plain Win32 calls with no pointer arguments.
        let (input, output) = unsafe { (GetConsoleCP(), GetConsoleOutputCP()) };
        if output == 0 {
            debug!("no console attached; leaving code pages alone");
            return Ok(Self { previous: None });
        }

        // Built before switching so that a partial switch is undone on drop.
        let guard = Self {
            previous: Some(Previous { input, output }),
        };

        // SAFETY: Plain Win32 calls with no pointer arguments.
        let switched = unsafe { SetConsoleOutputCP(CP_UTF8) != 0 && SetConsoleCP(CP_UTF8) != 0 };
        if !switched {
            return Err(EchoError::CodePage);
        }

        debug!(input, output, "console switched to UTF-8");
        Ok(guard)
    }

    /// Switch the attached console to UTF-8.
    ///
    /// # Errors
    ///
    /// Never fails on this platform; there are no console code pages.
    #[cfg(not(windows))]
    #[allow(clippy::unnecessary_wraps)]
    pub fn acquire() -> Result<Self, EchoError> {
        Ok(Self { previous: None })
    }

    /// Whether dropping this guard will restore anything.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.previous.is_some()
    }
}

impl Drop for CodePageGuard {
    fn drop(&mut self) {
        let Some(previous) = self.previous.take() else {
            return;
        };
        restore(previous);
    }
}

#[cfg(windows)]
fn restore(previous: Previous) {
    use tracing::debug;
    use windows_sys::Win32::System::Console::{SetConsoleCP, SetConsoleOutputCP};

    // SAFETY: Plain Win32 calls with no pointer arguments.
    unsafe {
        if previous.input != 0 {
            SetConsoleCP(previous.input);
        }
        if previous.output != 0 {
            SetConsoleOutputCP(previous.output);
        }
    }
    debug!(
        input = previous.input,
        output = previous.output,
        "console code pages restored"
    );
}

#[cfg(not(windows))]
fn restore(_previous: Previous) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_inert_off_windows() {
        let guard = CodePageGuard::acquire().unwrap();
        assert!(!guard.is_active());
    }
}
