use std::path::PathBuf;

use clap::Args;
use pixscram_core::Key;

use crate::cli::{ask_for_key, default_output};
use crate::CliResult;

/// Restores a scrambled image with the key that scrambled it
#[derive(Args, Debug)]
pub struct UnscrambleArgs {
    /// Key that was used for scrambling; prompted for when absent
    #[arg(short, long, value_name = "key")]
    pub key: Option<String>,

    /// Scrambled image that will be restored, used readonly
    #[arg(short = 'i', long = "in", value_name = "image file", required = true)]
    pub image: PathBuf,

    /// Restored image will be stored as this file [default: decrypted.<ext>]
    #[arg(short = 'o', long = "out", value_name = "output image file")]
    pub output: Option<PathBuf>,
}

impl UnscrambleArgs {
    pub fn run(self) -> CliResult<()> {
        let key = match self.key {
            Some(key) => Key::from(key),
            None => Key::from(ask_for_key(false)?),
        };

        let output = self
            .output
            .unwrap_or_else(|| default_output("decrypted", &self.image));
        log::debug!("unscrambling {:?} into {:?}", self.image, output);

        pixscram_core::commands::unscramble(&self.image, &output, key)?;

        println!(
            "Image unscrambled successfully, saved as '{}'",
            output.display()
        );

        Ok(())
    }
}
