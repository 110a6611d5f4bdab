#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;

use sam_agents::cli::Cli;
use sam_agents::config::Config;
use sam_agents::output::Palette;
use sam_agents::{commands, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let target = match &cli.target {
        Some(target) => target.clone(),
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    // Invalid config files abort here, before anything is installed
    let config = Config::load(&target)?.with_cli_overrides(&cli);
    let palette = Palette::new(config.color());

    let result = if cli.list_agents {
        commands::list_agents::execute(&palette)
    } else {
        commands::install::execute(&target, &config, &palette)
    };

    if let Err(e) = result {
        eprintln!("{}", palette.error(&format!("Error: {}", e)));
        std::process::exit(1);
    }

    Ok(())
}
