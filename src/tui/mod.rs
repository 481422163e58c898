//! Interactive editing session.
//!
//! Raw-mode input is decoded into [`Command`](crate::processor::Command)s and
//! fed to the processor one at a time; the preview is redrawn after each one.

pub mod keys;
pub mod ui;
pub mod widgets;

use std::io::{self, Stdout, Write};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::processor::{CommandProcessor, Outcome};

pub use ui::{CompactPreview, EditorView, Presenter, RichPreview};

/// Raw mode plus alternate screen, restored on drop.
struct Session {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Session {
    /// Set up the terminal, rolling back each step if a later one fails.
    fn start() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            }
        };
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the editor until the user quits.
///
/// Blocks on terminal input between commands. Resize events just cause a
/// redraw. Returns an error only if the terminal itself fails.
pub fn run<W: Write>(
    processor: &mut CommandProcessor<W>,
    presenter: &dyn Presenter,
) -> Result<()> {
    let mut session = Session::start()?;

    loop {
        session.terminal.draw(|frame| {
            let view = EditorView::new(processor.state(), processor.notice());
            presenter.draw(frame, &view);
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(command) = keys::map_key(key) else {
            continue;
        };
        if processor.process(command)? == Outcome::Quit {
            break;
        }
    }

    tracing::debug!("session ended");
    Ok(())
}
