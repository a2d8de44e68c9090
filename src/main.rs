mod cli;
mod converter;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_module("fb2txt", level)
        .try_init()?;

    converter::convert(&cli)
}
