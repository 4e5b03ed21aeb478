//! Command line layer: argument parsing (`args`) and orchestration
//! (`runner`). Embedders should use `fattura24::import` directly.
pub mod args;
pub mod runner;

pub use args::{CliArgs, normalize_flags};
pub use runner::{init_logging, one_line, run};
