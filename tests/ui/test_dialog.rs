//! Rendering tests for the selection dialog
//!
//! Uses ratatui TestBackend; assertions read the rendered buffer as text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use gitcompare::ui::components::{PAGE_ROWS, SelectDialog};

fn render(dialog: &SelectDialog, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            dialog.render(frame, frame.area());
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen(lines: &[String]) -> String {
    lines.join("\n")
}

fn options(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("commit {:02}", i)).collect()
}

#[test]
fn test_dialog_shows_title_message_and_options() {
    let dialog = SelectDialog::new(
        "Branch",
        "Select the branch to compare:",
        vec!["→ main (2 days ago)".to_string(), "feature (remote)".to_string()],
    );
    let text = screen(&render(&dialog, 70, 16));

    assert!(text.contains(" Branch "));
    assert!(text.contains("Select the branch to compare:"));
    assert!(text.contains("> → main (2 days ago)"));
    assert!(text.contains("  feature (remote)"));
    assert!(text.contains("[Enter] Select"));
}

#[test]
fn test_cursor_marker_follows_selection() {
    let mut dialog = SelectDialog::new("T", "Pick", options(3));
    dialog.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
    let text = screen(&render(&dialog, 60, 14));

    assert!(text.contains("> commit 02"));
    assert!(!text.contains("> commit 01"));
}

#[test]
fn test_long_list_shows_window_and_position() {
    let mut dialog = SelectDialog::new("Commits", "Pick", options(40));
    dialog.handle_key(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    let lines = render(&dialog, 60, 30);
    let text = screen(&lines);

    let shown = lines.iter().filter(|l| l.contains("commit ")).count();
    assert_eq!(shown, PAGE_ROWS);
    assert!(text.contains("> commit 40"));
    assert!(!text.contains("commit 25"));
    assert!(text.contains("commit 26"));
    assert!(text.contains(" 40/40 "));
}

#[test]
fn test_empty_dialog() {
    let dialog = SelectDialog::new("Commits", "Pick", Vec::new());
    let text = screen(&render(&dialog, 60, 14));

    assert!(text.contains("(nothing to select)"));
}

#[test]
fn test_small_terminal_does_not_panic() {
    let dialog = SelectDialog::new("Commits", "Pick", options(40));
    render(&dialog, 10, 5);
}
