//! Reusable UI components

pub mod dialog;

pub use dialog::{PAGE_ROWS, SelectDialog, SelectResult};
