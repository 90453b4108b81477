/// CLI argument collection via clap derive.
use std::ffi::OsString;
use std::iter;

use clap::Parser;

/// utf8-echo — print each argument as UTF-8 on its own line.
///
/// Flag handling is deliberately left to [`crate::echo::flags`]: clap only
/// gathers the raw tokens so that `-out <PATH>` and unrecognised `-` tokens
/// are judged by the same scanner.
#[derive(Debug, Parser)]
#[command(
    name = "utf8-echo",
    about = "Echo command-line arguments as UTF-8, one per line",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Arguments to echo, in order. `-out <PATH>` writes them to PATH instead of stdout.
    #[arg(
        value_name = "ARGS",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub args: Vec<OsString>,
}

/// Binary name used when the OS hands us an empty argument list.
const BIN_NAME: &str = "utf8-echo";

/// clap's end-of-options marker.
const ESCAPE: &str = "--";

impl Cli {
    /// Parse the process's own arguments.
    #[must_use]
    pub fn parse_raw() -> Self {
        Self::parse_raw_from(std::env::args_os())
    }

    /// Parse `args` (program name first) without letting clap interpret any
    /// token.
    ///
    /// An escape marker is placed after the program name, so every user token,
    /// including a leading `--`, lands in `args` untouched.
    #[must_use]
    pub fn parse_raw_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next().unwrap_or_else(|| OsString::from(BIN_NAME));
        Self::parse_from(
            iter::once(bin)
                .chain(iter::once(OsString::from(ESCAPE)))
                .chain(args),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Vec<OsString> {
        Cli::parse_raw_from(iter::once("utf8-echo").chain(args.iter().copied())).args
    }

    #[test]
    fn test_no_args() {
        assert!(parse(&[]).is_empty());
    }

    #[test]
    fn test_hyphen_tokens_pass_through() {
        assert_eq!(
            parse(&["-out", "x.txt", "-bogus"]),
            ["-out", "x.txt", "-bogus"].map(OsString::from)
        );
    }

    #[test]
    fn test_help_is_not_intercepted() {
        assert_eq!(parse(&["--help", "-V"]), ["--help", "-V"].map(OsString::from));
    }

    #[test]
    fn test_leading_escape_reaches_scanner() {
        assert_eq!(parse(&["--", "x"]), ["--", "x"].map(OsString::from));
        assert_eq!(parse(&["--"]), ["--"].map(OsString::from));
    }

    #[test]
    fn test_empty_os_args() {
        assert!(Cli::parse_raw_from(Vec::<OsString>::new()).args.is_empty());
    }
}
