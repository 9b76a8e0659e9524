//! gas-avg command-line entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use gas_avg::cli::{Cli, Commands, ConfigCommands};
use gas_avg::{logging, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = || Config::load(cli.config_path.as_deref());

    match &cli.command {
        None => commands::summarize::handle(&cli.summarize, &config()?),
        Some(Commands::Summarize(args)) => commands::summarize::handle(args, &config()?),
        Some(Commands::Presets) => commands::presets::handle(&config()?),
        Some(Commands::Config(ConfigCommands::Show)) => commands::config::handle_show(&config()?),
        Some(Commands::Completions { shell }) => commands::completions::handle(*shell),
    }
}
