/// CLI layer: argument collection and the output sink.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::{Output, write_error};
