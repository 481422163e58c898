use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::processor::Command;

/// Translate a key press into an editing command.
///
/// Arrow keys have letter fallbacks for terminals or multiplexers that
/// swallow them: `h`/`l` switch channel, `k`/`j` nudge, `K`/`J` nudge big.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let nudge = |big: bool, sign: i8| Command::Nudge { big, sign };

    let command = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Command::Quit,
        KeyCode::Char(c) if c.is_ascii_hexdigit() => {
            Command::SelectIndex(c.to_digit(16)? as usize)
        }
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        KeyCode::Char('s' | 'S') => Command::SavePalette,
        KeyCode::Char('r' | 'R') => Command::ResetPreset,
        KeyCode::Char(' ') => Command::ToggleLinkBrights,
        KeyCode::Char('[' | ',' | '<') => Command::PrevIndex,
        KeyCode::Char(']' | '.' | '>') => Command::NextIndex,
        KeyCode::Left | KeyCode::Char('h' | 'H') => Command::PrevChannel,
        KeyCode::Right | KeyCode::Char('l' | 'L') => Command::NextChannel,
        KeyCode::Up => nudge(shift, 1),
        KeyCode::Down => nudge(shift, -1),
        KeyCode::PageUp | KeyCode::Char('K') => nudge(true, 1),
        KeyCode::PageDown | KeyCode::Char('J') => nudge(true, -1),
        KeyCode::Char('k') => nudge(false, 1),
        KeyCode::Char('j') => nudge(false, -1),
        _ => return None,
    };
    Some(command)
}

/// One-line key reference shown above the preview.
pub const HELP: &str =
    "0-f pick  [ ] prev/next  \u{2190}\u{2192} channel  \u{2191}\u{2193} adjust (shift/PgUp/PgDn big)  space link brights  s save  r reset  q quit";
