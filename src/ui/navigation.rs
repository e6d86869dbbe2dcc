//! Cursor and scroll arithmetic for list selection
//!
//! Pure functions; the dialog owns the state and applies the results.

/// One step down, clamped to `last`
pub fn step_down(cursor: usize, last: usize) -> usize {
    cursor.saturating_add(1).min(last)
}

/// One step up, clamped to zero
pub fn step_up(cursor: usize) -> usize {
    cursor.saturating_sub(1)
}

/// One page down, clamped to `last`
pub fn page_down(cursor: usize, page: usize, last: usize) -> usize {
    cursor.saturating_add(page).min(last)
}

/// One page up, clamped to zero
pub fn page_up(cursor: usize, page: usize) -> usize {
    cursor.saturating_sub(page)
}

/// First visible row so that `cursor` stays inside a window of `rows`
///
/// A zero-row window leaves `offset` unchanged.
pub fn scroll_to(cursor: usize, offset: usize, rows: usize) -> usize {
    if rows == 0 {
        offset
    } else if cursor < offset {
        cursor
    } else if cursor >= offset + rows {
        cursor + 1 - rows
    } else {
        offset
    }
}
