use std::io;
use std::path::PathBuf;

/// Errors raised by the palette engine and its I/O boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// External color data that is not exactly 6 hex digits.
    #[error("invalid hex color {input:?}: expected 6 hex digits")]
    Format { input: String },

    /// The palette store is missing or holds fewer than 16 colors.
    #[error("no usable palette in {}", .path.display())]
    LoadAbsent { path: PathBuf },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
