//! # Pixscram Core API
//!
//! Scrambles images by reordering their pixels with a key-derived
//! permutation, and restores them with the same key. The pixel values
//! themselves are copied verbatim; only their positions change, so this is a
//! toy scheme and not cryptographically secure encryption.
//!
//! The pieces, bottom up:
//! - [`Key`] and [`derive_seed`] map a secret string to an integer seed
//! - [`Permutation`] turns `(seed, pixel count)` into a deterministic
//!   bijection and applies it forward (scramble) or inverse (unscramble)
//! - [`PixelGrid`] decodes an image file into a flat row-major RGB pixel
//!   sequence and encodes it back
//! - [`Scrambler`] wires the three together for whole files
//!
//! # Usage Examples
//!
//! ## Scramble an image
//!
//! ```rust
//! use image::{ImageBuffer, Rgb, RgbImage};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let plain = temp_dir.path().join("plain.png");
//! let img: RgbImage = ImageBuffer::from_fn(16, 16, |x, y| Rgb([x as u8, y as u8, 0]));
//! img.save(&plain).expect("Failed to write plain image");
//!
//! pixscram_core::api::scramble::prepare()
//!     .with_image(&plain)                                // input, used readonly
//!     .with_key("SuperSecret42")                         // drives the permutation
//!     .with_output(temp_dir.path().join("encrypted.png"))
//!     .execute()
//!     .expect("Failed to scramble image");
//! ```
//!
//! ## Unscramble it again
//!
//! ```rust,no_run
//! pixscram_core::api::unscramble::prepare()
//!     .with_image("encrypted.png")
//!     .with_key("SuperSecret42") // must be the key used for scrambling
//!     .with_output("decrypted.png")
//!     .execute()
//!     .expect("Failed to unscramble image");
//! ```

pub mod api;
pub mod commands;
pub mod error;
pub mod key;
pub mod media;
pub mod permutation;
pub mod result;

use std::path::{Path, PathBuf};

use log::debug;

pub use crate::error::PixscramError;
pub use crate::key::{derive_seed, Key};
pub use crate::media::{Persist, Pixel, PixelGrid};
pub use crate::permutation::Permutation;
pub use crate::result::Result;

/// Orchestrates a whole-file scramble or unscramble: carrier image in,
/// key-permuted image out.
#[derive(Default)]
pub struct Scrambler {
    key: Option<Key>,
    target: Option<PathBuf>,
    carrier: Option<PixelGrid>,
}

impl Scrambler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_media(&mut self, input_file: impl AsRef<Path>) -> Result<&mut Self> {
        self.carrier = Some(PixelGrid::from_file(input_file.as_ref())?);

        Ok(self)
    }

    pub fn save_as(&mut self, output_file: impl AsRef<Path>) -> &mut Self {
        self.target = Some(output_file.as_ref().to_owned());
        self
    }

    pub fn with_key<K: Into<Key>>(&mut self, key: K) -> &mut Self {
        self.key = Some(key.into());
        self
    }

    /// Apply the key-derived permutation forward and write the target file.
    pub fn scramble_and_save(&mut self) -> Result<&mut Self> {
        self.transform_and_save(Direction::Forward)
    }

    /// Apply the key-derived permutation inverse and write the target file.
    ///
    /// Recovers the original image only if key and pixel count match the
    /// scramble run; the permutation is regenerated, never stored.
    pub fn unscramble_and_save(&mut self) -> Result<&mut Self> {
        self.transform_and_save(Direction::Inverse)
    }

    fn transform_and_save(&mut self, direction: Direction) -> Result<&mut Self> {
        let Some(carrier) = self.carrier.as_ref() else {
            return Err(PixscramError::CarrierNotSet);
        };
        let Some(target) = self.target.as_ref() else {
            return Err(PixscramError::TargetNotSet);
        };
        let Some(key) = self.key.as_ref() else {
            return Err(PixscramError::KeyNotSet);
        };

        let permutation = Permutation::from_key(key, carrier.pixel_count());
        debug!(
            "generated permutation of length {} for a {}x{} image",
            permutation.len(),
            carrier.width(),
            carrier.height()
        );

        let pixels = match direction {
            Direction::Forward => permutation.apply_forward(carrier.pixels())?,
            Direction::Inverse => permutation.apply_inverse(carrier.pixels())?,
        };

        carrier.with_pixels(pixels)?.save_as(target)?;

        Ok(self)
    }
}

enum Direction {
    Forward,
    Inverse,
}
