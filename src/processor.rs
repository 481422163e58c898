use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{EditState, Palette};
use crate::protocol::TerminalColorProtocol;
use crate::store::PaletteStore;
use crate::theme::CATPPUCCIN_MOCHA;

/// A logical editing command, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SelectIndex(usize),
    NextIndex,
    PrevIndex,
    NextChannel,
    PrevChannel,
    /// One small or big step; `sign` is taken by its signum.
    Nudge { big: bool, sign: i8 },
    ToggleLinkBrights,
    ResetPreset,
    SavePalette,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Owns the edit state and applies every change to the live terminal.
///
/// Commands are processed one at a time; each mutating command recomputes
/// the effective palette and pushes it through the terminal protocol before
/// returning.
pub struct CommandProcessor<W: Write> {
    state: EditState,
    terminal: TerminalColorProtocol<W>,
    store: PaletteStore,
    preset: Palette,
    notice: Option<String>,
    finished: bool,
}

impl<W: Write> CommandProcessor<W> {
    pub fn new(state: EditState, terminal: W, store: PaletteStore) -> Self {
        Self {
            state,
            terminal: TerminalColorProtocol::new(terminal),
            store,
            preset: CATPPUCCIN_MOCHA,
            notice: None,
            finished: false,
        }
    }

    /// Palette restored by [`Command::ResetPreset`].
    pub fn with_preset(mut self, preset: Palette) -> Self {
        self.preset = preset;
        self
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    /// Last user-facing message (save result), if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn terminal(&self) -> &W {
        self.terminal.get_ref()
    }

    /// Push the current effective palette to the terminal.
    ///
    /// A write failure means the terminal is gone and is returned to the caller.
    pub fn apply(&mut self) -> Result<()> {
        let palette = self.state.palette().effective_palette();
        self.terminal
            .apply(&palette)
            .map_err(|e| Error::io("failed to write palette to terminal", e))
    }

    pub fn process(&mut self, command: Command) -> Result<Outcome> {
        if self.finished {
            return Ok(Outcome::Quit);
        }
        tracing::debug!(?command, "processing command");

        match command {
            Command::Quit => {
                self.finished = true;
                return Ok(Outcome::Quit);
            }
            Command::SavePalette => {
                self.save();
                return Ok(Outcome::Continue);
            }
            Command::SelectIndex(index) => self.state.select(index),
            Command::NextIndex => self.state.select_next(),
            Command::PrevIndex => self.state.select_prev(),
            Command::NextChannel => self.state.next_channel(),
            Command::PrevChannel => self.state.prev_channel(),
            Command::Nudge { big, sign } => self.state.nudge_selected(big, sign),
            Command::ToggleLinkBrights => self.state.toggle_link_brights(),
            Command::ResetPreset => {
                let preset = self.preset;
                self.state.palette_mut().reset(&preset);
            }
        }

        self.apply()?;
        Ok(Outcome::Continue)
    }

    fn save(&mut self) {
        let palette = self.state.palette().effective_palette();
        let notice = match self.store.save(&palette) {
            Ok(()) => format!("saved {}", self.store.path().display()),
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                format!("save failed: {e}")
            }
        };
        self.notice = Some(notice);
    }
}
