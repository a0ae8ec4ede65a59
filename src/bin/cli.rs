// src/bin/cli.rs
use color_eyre::eyre::eyre;
use photocat::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = cli::parse_cli().map_err(|e| eyre!("{e}"))?;
    cli::run(opts).map_err(|e| eyre!("{e}"))?;
    Ok(())
}
