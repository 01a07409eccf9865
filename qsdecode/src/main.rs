mod cli;
mod driver;
mod error;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;

use crate::cli::Args;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().filter_or("QSDECODE_LOG", "warn"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();
    let source = args.source();

    driver::run(
        &source,
        io::stdin().lock(),
        args.parser_options(),
        io::stdout().lock(),
    )
    .context("failed to decode query string")?;

    Ok(())
}
