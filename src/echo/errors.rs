/// Errors from the echo pipeline.
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors. Each one ends the process after the message is written.
#[derive(Debug, Error)]
pub enum EchoError {
    /// The console could not be switched to the UTF-8 code page.
    #[error("Failed to set UTF-8 code page.")]
    CodePage,

    /// A conversion buffer could not be allocated.
    #[error("Out of memory.")]
    OutOfMemory,

    /// `-out` was the last argument.
    #[error("Missing value for flag '-out'.")]
    MissingFlagValue,

    /// A `-` token other than `-out`.
    #[error("Unrecognised flag '{flag}'.")]
    UnrecognisedFlag {
        /// The offending token, lossily decoded for display.
        flag: String,
    },

    /// The redirect target could not be opened for writing.
    #[error("Failed to open '{}' for writing: {source}", .path.display())]
    OpenOutput {
        /// Path given after `-out`.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

impl EchoError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CodePage
            | Self::OutOfMemory
            | Self::MissingFlagValue
            | Self::UnrecognisedFlag { .. }
            | Self::OpenOutput { .. } => 1,
        }
    }
}
