/// Echo domain layer: flag scanning, text conversion and the pipeline.
pub mod convert;
pub mod errors;
pub mod flags;
pub mod run;

pub use errors::EchoError;
pub use run::run;
