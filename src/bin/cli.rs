// src/bin/cli.rs
use wow_overlay::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
