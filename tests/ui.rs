//! UI rendering tests using ratatui's TestBackend
//!
//! These tests render components into an in-memory terminal and check
//! what ended up on screen.

#[path = "ui/test_dialog.rs"]
mod test_dialog;
