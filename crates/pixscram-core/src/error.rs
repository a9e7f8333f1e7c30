use thiserror::Error;

#[derive(Error, Debug)]
pub enum PixscramError {
    /// Represents a pixel buffer and a permutation of disagreeing lengths.
    /// This is an integration error, for example unscrambling with a permutation
    /// generated for different image dimensions
    #[error("Shape mismatch: {pixels} pixels cannot be mapped by a permutation of length {permutation}")]
    ShapeMismatch { pixels: usize, permutation: usize },

    /// Represents an externally supplied index sequence that is not a bijection
    /// on [0, len), for example one with duplicate or out-of-range entries
    #[error("Invalid permutation: the index sequence is not a bijection on 0..{0}")]
    InvalidPermutation(usize),

    /// Represents an unreadable input image, for example a missing file or a broken PNG
    #[error("Image media is invalid or not readable")]
    UnreadableImage,

    /// Represents an output path whose extension implies no supported image format
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier image set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("No key set")]
    KeyNotSet,
}
