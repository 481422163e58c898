use std::path::PathBuf;

use clap::Parser;

use crate::model::DEFAULT_BRIGHT_BOOST;
use crate::store::DEFAULT_PALETTE_FILE;

/// Live-tune the 16 ANSI colors of the running terminal.
#[derive(Parser, Debug)]
#[command(name = "ansi-tuner", version, about)]
pub struct Args {
    /// Palette file to load at startup and write on save
    #[arg(short, long, default_value = DEFAULT_PALETTE_FILE)]
    pub palette: PathBuf,

    /// Lightness boost used to derive linked bright colors
    #[arg(long, default_value_t = DEFAULT_BRIGHT_BOOST)]
    pub boost: f64,

    /// Start with bright colors linked to the normal ones
    #[arg(long)]
    pub link_brights: bool,

    /// Preview only swatches and attributes, without the code sample
    #[arg(long)]
    pub compact: bool,

    /// Apply the palette to the terminal and exit
    #[arg(long, conflicts_with = "ghostty")]
    pub apply: bool,

    /// Print the palette as a Ghostty theme and exit
    #[arg(long)]
    pub ghostty: bool,
}
