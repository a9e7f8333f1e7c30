//! RGB pixel grids and their file codec.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use log::error;

use crate::error::PixscramError;
use crate::result::Result;

use super::Persist;

/// One RGB pixel record. Channel values are moved around verbatim, never
/// blended or quantized.
pub type Pixel = [u8; 3];

/// A rectangular grid of RGB pixels in row-major order
/// (index = row * width + col).
///
/// Decoding always normalizes to 3 channels: alpha and color-profile
/// metadata of the input file are discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelGrid {
    pub fn from_file(path: &Path) -> Result<Self> {
        let img = image::open(path)
            .map_err(|e| {
                error!("Error reading image {path:?}: {e}");
                PixscramError::UnreadableImage
            })?
            .to_rgb8();

        Ok(Self::from_image(img))
    }

    pub fn from_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .into_raw()
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect();

        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// The row-major flattening of the grid.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Rebuild a grid of the same dimensions from a reordered pixel sequence.
    pub fn with_pixels(&self, pixels: Vec<Pixel>) -> Result<Self> {
        if pixels.len() != self.pixels.len() {
            return Err(PixscramError::ShapeMismatch {
                pixels: pixels.len(),
                permutation: self.pixels.len(),
            });
        }

        Ok(Self {
            width: self.width,
            height: self.height,
            pixels,
        })
    }

    pub fn to_image(&self) -> RgbImage {
        let mut raw = Vec::with_capacity(self.pixels.len() * 3);
        for pixel in &self.pixels {
            raw.extend_from_slice(pixel);
        }

        // len is pixel_count * 3 by construction
        RgbImage::from_raw(self.width, self.height, raw)
            .expect("pixel buffer length matches grid dimensions")
    }
}

impl Persist for PixelGrid {
    /// Write the grid as an image file, format implied by the path extension.
    ///
    /// The image is fully encoded in memory before anything touches the
    /// filesystem, so a failed encode leaves no half-written output file.
    fn save_as(&self, path: &Path) -> Result<()> {
        let format =
            ImageFormat::from_path(path).map_err(|_e| PixscramError::UnsupportedMedia)?;

        let mut buf = Cursor::new(Vec::new());
        self.to_image().write_to(&mut buf, format).map_err(|e| {
            error!("Error encoding image: {e}");
            PixscramError::ImageEncodingError
        })?;

        fs::write(path, buf.into_inner()).map_err(|source| {
            error!("Error writing file {path:?}: {source}");
            PixscramError::WriteError { source }
        })
    }
}
