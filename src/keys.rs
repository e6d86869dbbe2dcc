//! Keybinding definitions for the selection dialog

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// =============================================================================
// Navigation keys
// =============================================================================

/// Move cursor up (vim style)
pub const MOVE_UP: KeyCode = KeyCode::Char('k');

/// Move cursor up (arrow key)
pub const MOVE_UP_ARROW: KeyCode = KeyCode::Up;

/// Move cursor down (vim style)
pub const MOVE_DOWN: KeyCode = KeyCode::Char('j');

/// Move cursor down (arrow key)
pub const MOVE_DOWN_ARROW: KeyCode = KeyCode::Down;

/// Go to first option
pub const GO_TOP: KeyCode = KeyCode::Home;

/// Go to last option
pub const GO_BOTTOM: KeyCode = KeyCode::End;

/// Move one page up
pub const PAGE_UP: KeyCode = KeyCode::PageUp;

/// Move one page down
pub const PAGE_DOWN: KeyCode = KeyCode::PageDown;

// =============================================================================
// Decision keys
// =============================================================================

/// Choose the option under the cursor
pub const SELECT: KeyCode = KeyCode::Enter;

/// Leave without choosing
pub const CANCEL: KeyCode = KeyCode::Esc;

/// Alternative cancel
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Check if key is move up (k or ↑)
pub fn is_move_up(code: KeyCode) -> bool {
    code == MOVE_UP || code == MOVE_UP_ARROW
}

/// Check if key is move down (j or ↓)
pub fn is_move_down(code: KeyCode) -> bool {
    code == MOVE_DOWN || code == MOVE_DOWN_ARROW
}

/// Check if key leaves the dialog without a choice
///
/// Ctrl+C is included because raw mode swallows SIGINT.
pub fn is_cancel(key: &KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'));
    }
    key.code == CANCEL || key.code == QUIT
}
