pub mod ghostty;
pub mod palette_file;

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Palette;

/// A text format an effective palette can be written out as.
pub trait ThemeBackend {
    fn name(&self) -> &str;

    fn serialize(&self, palette: &Palette) -> String;

    fn write_to(&self, palette: &Palette, path: &Path) -> Result<()> {
        let content = self.serialize(palette);
        std::fs::write(path, content).map_err(|e| {
            Error::io(
                format!("failed to write {} to {}", self.name(), path.display()),
                e,
            )
        })
    }
}
