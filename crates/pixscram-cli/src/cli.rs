use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use dialoguer::Password;

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Scramble(scramble::ScrambleArgs),
    Unscramble(unscramble::UnscrambleArgs),
    Keygen(keygen::KeygenArgs),
}

/// Prompt for the key without echoing it. Scrambling asks twice so a typo
/// does not produce an image nobody can ever restore.
pub fn ask_for_key(confirm: bool) -> CliResult<String> {
    let mut prompt = Password::new().with_prompt("Encryption key");
    if confirm {
        prompt = prompt.with_confirmation("Confirm key", "The keys do not match");
    }

    prompt
        .interact()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e).into())
}

/// Default output path convention: `<stem>.<ext>` in the current working
/// directory, with `<ext>` taken from the input file.
pub fn default_output(stem: &str, input: &Path) -> PathBuf {
    match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => PathBuf::from(format!("{stem}.{ext}")),
        None => PathBuf::from(stem),
    }
}
