//! OSC 4/10/11 escape sequences for pushing a palette into a live terminal.
//!
//! Every sequence is terminated with BEL rather than ST; BEL is understood
//! by every terminal that implements these commands.

use std::io::{self, Write};

use crate::color::Color;
use crate::model::{Palette, SLOT_COUNT};

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Slot the default foreground is taken from.
pub const FOREGROUND_SLOT: usize = 7;
/// Slot the default background is taken from.
pub const BACKGROUND_SLOT: usize = 0;

fn rgb_spec(color: Color) -> String {
    format!("rgb:{:02x}/{:02x}/{:02x}", color.r, color.g, color.b)
}

/// `ESC ] 4 ; index ; rgb:RR/GG/BB BEL`
pub fn encode_set_color(index: usize, color: Color) -> String {
    format!("{ESC}]4;{index};{}{BEL}", rgb_spec(color))
}

/// `ESC ] 10 ; rgb:RR/GG/BB BEL`
pub fn encode_set_foreground(color: Color) -> String {
    format!("{ESC}]10;{}{BEL}", rgb_spec(color))
}

/// `ESC ] 11 ; rgb:RR/GG/BB BEL`
pub fn encode_set_background(color: Color) -> String {
    format!("{ESC}]11;{}{BEL}", rgb_spec(color))
}

/// The full byte sequence for a palette: slots 0-15 in order, then the
/// default foreground (slot 7) and background (slot 0).
///
/// Slots must come first so terminals that resolve default colors through
/// palette entries see the new values.
pub fn encode_palette(palette: &Palette) -> String {
    let mut out = String::with_capacity(SLOT_COUNT * 24 + 48);
    for (i, color) in palette.iter().enumerate() {
        out.push_str(&encode_set_color(i, *color));
    }
    out.push_str(&encode_set_foreground(palette[FOREGROUND_SLOT]));
    out.push_str(&encode_set_background(palette[BACKGROUND_SLOT]));
    out
}

/// Pushes palettes to a terminal output stream.
///
/// The protocol is write-only: nothing is read back, so applying the same
/// palette twice leaves the terminal in the same state.
pub struct TerminalColorProtocol<W: Write> {
    out: W,
}

impl<W: Write> TerminalColorProtocol<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the whole palette in one buffered write, then flush.
    pub fn apply(&mut self, palette: &Palette) -> io::Result<()> {
        let bytes = encode_palette(palette);
        self.out.write_all(bytes.as_bytes())?;
        self.out.flush()?;
        tracing::trace!(bytes = bytes.len(), "applied palette");
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
