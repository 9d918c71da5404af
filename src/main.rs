//! This crate contains the source code for the binary for the game labyrintree.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrintree::{init_logging, App, Args, Settings};

fn main() -> Result<()> {
    install()?;

    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let settings = Settings::from(&args);
    settings.validate()?;

    let mut terminal = ratatui::init();
    let result = App::new(settings).run(&mut terminal);
    ratatui::restore();

    result
}
