//! Single-select dialog
//!
//! Shows a list of option labels and returns the index of the chosen one.
//! Only the labels are displayed; callers map the index back to their data.

mod select;

use ratatui::layout::{Constraint, Layout, Rect};

/// Options visible at once; longer lists scroll
pub const PAGE_ROWS: usize = 15;

/// Outcome of a dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectResult {
    /// Index into the options
    Chosen(usize),
    Cancelled,
}

/// Dialog state
#[derive(Debug, Clone)]
pub struct SelectDialog {
    pub title: String,
    pub message: String,
    pub options: Vec<String>,
    /// Highlighted option
    pub cursor: usize,
    /// First visible option
    pub offset: usize,
}

impl SelectDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            options,
            cursor: 0,
            offset: 0,
        }
    }

    /// Options currently inside the scroll window, with their indices
    pub fn visible(&self) -> impl Iterator<Item = (usize, &str)> {
        self.options
            .iter()
            .map(String::as_str)
            .enumerate()
            .skip(self.offset)
            .take(PAGE_ROWS)
    }

    fn last_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }
}

/// Calculate a centered rectangle within the given area
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical_margin = area.height.saturating_sub(height) / 2;
    let horizontal_margin = area.width.saturating_sub(width) / 2;

    let [_, middle, _] = Layout::vertical([
        Constraint::Length(vertical_margin),
        Constraint::Length(height),
        Constraint::Length(vertical_margin),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Length(horizontal_margin),
        Constraint::Length(width),
        Constraint::Length(horizontal_margin),
    ])
    .areas(middle);

    center
}
