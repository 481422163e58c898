use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use ansi_tuner::backends::ghostty::GhosttyBackend;
use ansi_tuner::backends::ThemeBackend;
use ansi_tuner::cli::Args;
use ansi_tuner::model::{EditState, PaletteModel};
use ansi_tuner::processor::CommandProcessor;
use ansi_tuner::protocol::TerminalColorProtocol;
use ansi_tuner::store::PaletteStore;
use ansi_tuner::tui::{self, CompactPreview, Presenter, RichPreview};

fn main() -> Result<()> {
    let args = Args::parse();

    let store = PaletteStore::new(&args.palette);
    let palette = store.load_or_default();

    if args.ghostty {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(GhosttyBackend.serialize(&palette).as_bytes())
            .context("failed to write theme to stdout")?;
        return Ok(());
    }

    if args.apply {
        TerminalColorProtocol::new(io::stdout().lock())
            .apply(&palette)
            .context("failed to apply palette to terminal")?;
        return Ok(());
    }

    let mut model = PaletteModel::new(&palette).with_boost(args.boost);
    model.set_link_brights(args.link_brights);
    let mut processor = CommandProcessor::new(EditState::new(model), io::stdout(), store);
    processor.apply().context("failed to apply palette to terminal")?;

    let presenter: &dyn Presenter = if args.compact {
        &CompactPreview
    } else {
        &RichPreview
    };
    tui::run(&mut processor, presenter)
}
