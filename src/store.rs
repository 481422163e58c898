use std::path::{Path, PathBuf};

use crate::backends::palette_file::{self, PaletteFile};
use crate::backends::ThemeBackend;
use crate::error::{Error, Result};
use crate::model::Palette;
use crate::theme::CATPPUCCIN_MOCHA;

/// Default palette store, relative to the working directory.
pub const DEFAULT_PALETTE_FILE: &str = "palette.txt";

/// The flat-file palette store. Read once at startup, written on save.
#[derive(Debug, Clone)]
pub struct PaletteStore {
    path: PathBuf,
}

impl PaletteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored palette.
    ///
    /// A missing, unreadable or incomplete file is reported as
    /// [`Error::LoadAbsent`].
    pub fn load(&self) -> Result<Palette> {
        let absent = || Error::LoadAbsent {
            path: self.path.clone(),
        };
        let text = std::fs::read_to_string(&self.path).map_err(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "palette store not readable");
            absent()
        })?;
        palette_file::parse(&text).ok_or_else(absent)
    }

    /// Load the stored palette, falling back to the built-in theme.
    pub fn load_or_default(&self) -> Palette {
        match self.load() {
            Ok(palette) => {
                tracing::info!(path = %self.path.display(), "loaded palette");
                palette
            }
            Err(e) => {
                tracing::info!(error = %e, "using built-in palette");
                CATPPUCCIN_MOCHA
            }
        }
    }

    pub fn save(&self, palette: &Palette) -> Result<()> {
        PaletteFile.write_to(palette, &self.path)?;
        tracing::info!(path = %self.path.display(), "saved palette");
        Ok(())
    }
}

impl Default for PaletteStore {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE_FILE)
    }
}
