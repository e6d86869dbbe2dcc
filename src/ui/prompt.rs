//! Interactive choice between options
//!
//! [`Selector`] is the seam the application talks to; the terminal
//! implementation draws a [`SelectDialog`] on the alternate screen.

use std::io::{self, IsTerminal};

use crossterm::event::{self, Event, KeyEventKind};
use log::debug;

use super::components::{SelectDialog, SelectResult};

/// Lets the user pick one of several options
pub trait Selector {
    /// Index of the chosen option, or `None` when the user cancelled
    fn choose(&mut self, title: &str, message: &str, options: &[String])
    -> io::Result<Option<usize>>;
}

/// Full-screen dialog on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalSelector;

impl Selector for TerminalSelector {
    fn choose(
        &mut self,
        title: &str,
        message: &str,
        options: &[String],
    ) -> io::Result<Option<usize>> {
        if options.is_empty() {
            return Ok(None);
        }
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            return Err(io::Error::other(
                "interactive selection needs a terminal; pass --start and --end",
            ));
        }

        let mut dialog = SelectDialog::new(title, message, options.to_vec());
        let mut terminal = ratatui::try_init()?;
        let _restore = scopeguard::guard((), |_| ratatui::restore());

        loop {
            terminal.draw(|frame| dialog.render(frame, frame.area()))?;
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match dialog.handle_key(key) {
                    Some(SelectResult::Chosen(index)) => {
                        debug!("{}: chose option {}", title, index);
                        return Ok(Some(index));
                    }
                    Some(SelectResult::Cancelled) => return Ok(None),
                    None => {}
                }
            }
        }
    }
}
