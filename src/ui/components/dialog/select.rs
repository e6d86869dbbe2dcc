//! Select dialog input handling and rendering

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::{PAGE_ROWS, SelectDialog, SelectResult, centered_rect};
use crate::keys;
use crate::ui::navigation;
use crate::ui::symbols::{empty, markers};
use crate::ui::theme::dialog as colors;

/// Narrowest dialog, so the key hints fit
const MIN_WIDTH: u16 = 44;

/// Blank, message, blank, blank, hints, plus two border rows
const CHROME_ROWS: u16 = 7;

impl SelectDialog {
    /// Handle key input, returns Some(result) when the dialog should close
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SelectResult> {
        if keys::is_cancel(&key) {
            return Some(SelectResult::Cancelled);
        }

        let last = self.last_index();
        self.cursor = match key.code {
            k if keys::is_move_down(k) => navigation::step_down(self.cursor, last),
            k if keys::is_move_up(k) => navigation::step_up(self.cursor),
            keys::PAGE_DOWN => navigation::page_down(self.cursor, PAGE_ROWS, last),
            keys::PAGE_UP => navigation::page_up(self.cursor, PAGE_ROWS),
            keys::GO_TOP => 0,
            keys::GO_BOTTOM => last,
            keys::SELECT => {
                return Some(if self.options.is_empty() {
                    SelectResult::Cancelled
                } else {
                    SelectResult::Chosen(self.cursor)
                });
            }
            _ => return None,
        };
        self.offset = navigation::scroll_to(self.cursor, self.offset, PAGE_ROWS);
        None
    }

    /// Render the dialog centered on screen
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let rows = self.options.len().clamp(1, PAGE_ROWS) as u16;
        let longest = self
            .options
            .iter()
            .map(|o| o.chars().count() + markers::CURSOR.len())
            .chain(std::iter::once(self.message.chars().count()))
            .max()
            .unwrap_or(0);
        let wanted = u16::try_from(longest + 4).unwrap_or(u16::MAX);
        let width = wanted.max(MIN_WIDTH).min(area.width.saturating_sub(4));
        let height = (rows + CHROME_ROWS).min(area.height);

        let dialog_area = centered_rect(width, height, area);

        // Clear the area behind the dialog
        frame.render_widget(Clear, dialog_area);

        let mut lines = vec![
            Line::from(""),
            Line::from(self.message.as_str()),
            Line::from(""),
        ];

        if self.options.is_empty() {
            lines.push(Line::from(Span::styled(
                empty::NO_OPTIONS,
                Style::default().fg(colors::POSITION),
            )));
        }
        for (i, label) in self.visible() {
            if i == self.cursor {
                lines.push(Line::from(Span::styled(
                    format!("{}{}", markers::CURSOR, label),
                    Style::default()
                        .fg(colors::CURSOR)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(format!("  {}", label)));
            }
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("[j/k]", Style::default().fg(colors::KEY_MOVE)),
            Span::raw(" Move "),
            Span::styled("[Enter]", Style::default().fg(colors::KEY_SELECT)),
            Span::raw(" Select "),
            Span::styled("[Esc]", Style::default().fg(colors::KEY_CANCEL)),
            Span::raw(" Cancel"),
        ]));

        let mut block = Block::default()
            .title(format!(" {} ", self.title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER));
        if self.options.len() > PAGE_ROWS {
            block = block.title_bottom(
                Line::from(Span::styled(
                    format!(" {}/{} ", self.cursor + 1, self.options.len()),
                    Style::default().fg(colors::POSITION),
                ))
                .right_aligned(),
            );
        }

        frame.render_widget(Paragraph::new(lines).block(block), dialog_area);
    }
}
