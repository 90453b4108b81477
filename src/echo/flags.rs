/// Output redirection flag scanning.
///
/// Arguments are scanned left to right. `-out` consumes itself and the next
/// argument; every other token that starts with `-` (except a lone `-`) is
/// rejected. Everything else is payload, in its original order.
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use super::errors::EchoError;

/// The only recognised flag.
pub const OUT_FLAG: &str = "-out";

/// Leading byte that marks a token as a flag.
pub const FLAG_PREFIX: u8 = b'-';

/// The result of scanning the argument list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Invocation {
    /// Redirect target from the last `-out <PATH>`, if any.
    pub out_path: Option<PathBuf>,
    /// Arguments to echo, with flag tokens and their values removed.
    pub payload: Vec<OsString>,
}

fn is_flag(arg: &OsStr) -> bool {
    let bytes = arg.as_encoded_bytes();
    bytes.len() > 1 && bytes[0] == FLAG_PREFIX
}

/// Split `args` (program name already excluded) into flags and payload.
///
/// # Errors
///
/// Returns `EchoError::MissingFlagValue` if `-out` has no following argument,
/// or `EchoError::UnrecognisedFlag` for any other flag-looking token.
pub fn scan<I>(args: I) -> Result<Invocation, EchoError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut invocation = Invocation::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg.as_os_str() == OsStr::new(OUT_FLAG) {
            let path = args.next().ok_or(EchoError::MissingFlagValue)?;
            invocation.out_path = Some(PathBuf::from(path));
        } else if is_flag(&arg) {
            return Err(EchoError::UnrecognisedFlag {
                flag: arg.to_string_lossy().into_owned(),
            });
        } else {
            invocation.payload.push(arg);
        }
    }

    Ok(invocation)
}
