//! Output symbols (status markers, change indicators)
//!
//! Unicode throughout. Change indicators live on [`crate::model::ChangeKind`].

/// Line prefixes for status messages
pub mod status {
    /// Section title (▶)
    pub const SECTION: char = '▶';
    /// Success (✓)
    pub const SUCCESS: char = '✓';
    /// Error (✗)
    pub const ERROR: char = '✗';
    /// Warning (⚠)
    pub const WARNING: char = '⚠';
    /// Information (ℹ)
    pub const INFO: char = 'ℹ';
}

/// Markers inside lists
pub mod markers {
    /// Branch that HEAD points to (→)
    pub const HEAD: char = '→';
    /// Separator between old and new path of a rename
    pub const RENAME: &str = "→";
    /// Cursor in the selection dialog
    pub const CURSOR: &str = "> ";
    /// Underline for headers
    pub const UNDERLINE: char = '=';
}

/// Labels for missing data
pub mod empty {
    /// Shown when a dialog has no options
    pub const NO_OPTIONS: &str = "(nothing to select)";
    /// Shown for branches whose tip could not be read
    pub const NO_COMMIT: &str = "(no commit information)";
}
