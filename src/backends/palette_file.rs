use crate::color::Color;
use crate::model::{Palette, SLOT_COUNT};

use super::ThemeBackend;

const HEADER: &str = "\
# palette.txt: 16 ANSI colors (indexes 0..15), one hex RRGGBB per line.
# Comments and blank lines are ignored. Extra colors are ignored.
# 0..7  = normal  (black, red, green, yellow, blue, magenta, cyan, white)
# 8..15 = bright  (br_black .. br_white)
";

/// The plain-text palette store format: a comment header followed by one
/// lowercase hex color per line.
pub struct PaletteFile;

impl ThemeBackend for PaletteFile {
    fn name(&self) -> &str {
        "palette file"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let mut out = String::from(HEADER);
        for color in palette {
            out.push_str(&color.to_hex());
            out.push('\n');
        }
        out
    }
}

/// Read a palette from store text.
///
/// Blank lines are skipped. A line that is 6 hex digits, with or without a
/// leading `#`, is a color; any other line (comments included) is ignored.
/// Returns `None` unless at least 16 colors are found; only the first 16 are
/// used.
pub fn parse(text: &str) -> Option<Palette> {
    let mut colors = Vec::with_capacity(SLOT_COUNT);
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match Color::from_hex(line) {
            Ok(color) => colors.push(color),
            Err(_) => {
                if !line.starts_with('#') {
                    tracing::debug!(line = lineno + 1, "skipping malformed palette line");
                }
            }
        }
        if colors.len() == SLOT_COUNT {
            break;
        }
    }
    colors.try_into().ok()
}
