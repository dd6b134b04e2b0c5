//! Command-line interface for tputviz
//!
//! Argument parsing and the interactive fallback used when no file is given.

pub mod args;
pub mod prompt;

pub use args::{Args, ThemeArg};
pub use prompt::prompt_for_path;
