//! Color theme definitions
//!
//! Centralized color constants for consistent output.

/// Colors for line-oriented terminal output
pub mod output {
    use crossterm::style::Color;

    /// Header text and underline
    pub const HEADER: Color = Color::Cyan;
    /// Success line
    pub const SUCCESS: Color = Color::Green;
    /// Error line
    pub const ERROR: Color = Color::Red;
    /// Warning line
    pub const WARNING: Color = Color::Yellow;
    /// Informational line and section titles
    pub const INFO: Color = Color::Blue;
    /// Branch names
    pub const BRANCH: Color = Color::Magenta;
    /// Commit hashes
    pub const COMMIT: Color = Color::Yellow;
    /// File paths
    pub const FILE: Color = Color::Cyan;
    /// Counts in summaries
    pub const COUNT: Color = Color::Green;
    /// Secondary text (authors, timestamps)
    pub const DIM: Color = Color::DarkGrey;
}

/// Colors for change groups
pub mod changes {
    use crossterm::style::Color;

    pub const ADDED: Color = Color::Green;
    pub const MODIFIED: Color = Color::Yellow;
    pub const DELETED: Color = Color::Red;
    pub const RENAMED: Color = Color::Magenta;
}

/// Colors for the selection dialog
pub mod dialog {
    use ratatui::style::Color;

    /// Dialog border
    pub const BORDER: Color = Color::Cyan;
    /// Highlighted option
    pub const CURSOR: Color = Color::Cyan;
    /// Scroll position indicator
    pub const POSITION: Color = Color::DarkGray;
    /// Hint for navigation keys
    pub const KEY_MOVE: Color = Color::Cyan;
    /// Hint for the select key
    pub const KEY_SELECT: Color = Color::Green;
    /// Hint for the cancel key
    pub const KEY_CANCEL: Color = Color::Red;
}
