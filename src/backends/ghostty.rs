use crate::model::Palette;
use crate::protocol::{BACKGROUND_SLOT, FOREGROUND_SLOT};

use super::ThemeBackend;

/// Ghostty theme file (`key = value` lines).
pub struct GhosttyBackend;

/// Slot used for the selection background (bright black).
const SELECTION_SLOT: usize = 8;

impl ThemeBackend for GhosttyBackend {
    fn name(&self) -> &str {
        "Ghostty theme"
    }

    fn serialize(&self, palette: &Palette) -> String {
        let bg = palette[BACKGROUND_SLOT];
        let fg = palette[FOREGROUND_SLOT];

        let mut out = String::new();
        out.push_str(&format!("background = {bg}\n"));
        out.push_str(&format!("foreground = {fg}\n"));
        out.push_str(&format!("cursor-color = {fg}\n"));
        out.push_str(&format!("cursor-text = {bg}\n"));
        out.push_str(&format!(
            "selection-background = {}\n",
            palette[SELECTION_SLOT]
        ));
        out.push_str(&format!("selection-foreground = {fg}\n"));
        for (i, color) in palette.iter().enumerate() {
            out.push_str(&format!("palette = {i}={color}\n"));
        }
        out
    }
}
