use std::path::PathBuf;

use clap::Args;
use pixscram_core::Key;

use crate::cli::{ask_for_key, default_output};
use crate::CliResult;

/// Scrambles the pixels of an image with a key-derived permutation
#[derive(Args, Debug)]
pub struct ScrambleArgs {
    /// Key the pixel permutation is derived from; prompted for when absent
    #[arg(short, long, value_name = "key", conflicts_with = "generate_key")]
    pub key: Option<String>,

    /// Generate a fresh key and print it instead of providing one
    #[arg(short = 'g', long = "gen-key")]
    pub generate_key: bool,

    /// Image that will be scrambled, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Scrambled image will be stored as this file [default: encrypted.<ext>]
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,
}

impl ScrambleArgs {
    pub fn run(self) -> CliResult<()> {
        let key = match self.key {
            Some(key) => Key::from(key),
            None if self.generate_key => {
                let key = Key::generate();
                println!("Generated key: {key}");
                key
            }
            None => Key::from(ask_for_key(true)?),
        };

        let output = self
            .output
            .unwrap_or_else(|| default_output("encrypted", &self.image));
        log::debug!("scrambling {:?} into {:?}", self.image, output);

        pixscram_core::commands::scramble(&self.image, &output, key)?;

        println!("Image scrambled successfully, saved as '{}'", output.display());
        println!("Keep the key safe, it is required to unscramble the image.");

        Ok(())
    }
}
