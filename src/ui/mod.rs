//! UI layer
//!
//! Line-oriented output formatting, and the selection dialog used when an
//! endpoint is not given on the command line.

pub mod components;
pub mod format;
pub mod navigation;
pub mod prompt;
pub mod symbols;
pub mod theme;

pub use format::{Formatter, branch_option, commit_option, time_ago};
pub use prompt::{Selector, TerminalSelector};
