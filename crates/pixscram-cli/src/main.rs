use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub(crate) type CliResult<T> = std::result::Result<T, pixscram_core::PixscramError>;

fn main() -> CliResult<()> {
    env_logger::init();

    match CliArgs::parse().command {
        Commands::Scramble(args) => args.run(),
        Commands::Unscramble(args) => args.run(),
        Commands::Keygen(args) => args.run(),
    }
}
