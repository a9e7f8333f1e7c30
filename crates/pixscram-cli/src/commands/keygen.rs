use clap::Args;
use pixscram_core::Key;

use crate::CliResult;

/// Generates a fresh random key and prints it
#[derive(Args, Debug)]
pub struct KeygenArgs {}

impl KeygenArgs {
    pub fn run(self) -> CliResult<()> {
        println!("{}", Key::generate());
        Ok(())
    }
}
