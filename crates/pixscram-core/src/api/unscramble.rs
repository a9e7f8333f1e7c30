use std::path::{Path, PathBuf};

use crate::{Key, PixscramError, Scrambler};

pub fn prepare() -> UnscrambleApi {
    UnscrambleApi::default()
}

#[derive(Default, Debug)]
pub struct UnscrambleApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    key: Option<Key>,
}

impl UnscrambleApi {
    /// This is the scrambled image that will be restored
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The restored image will be stored as this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the key that was used for scrambling
    pub fn with_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the key, `None` leaves the key unset
    pub fn use_key<K: Into<Key>>(mut self, key: Option<K>) -> Self {
        self.key = key.map(Into::into);
        self
    }

    /// Execute the unscramble and block until the output file is written
    pub fn execute(self) -> Result<(), PixscramError> {
        let Some(image) = self.image else {
            return Err(PixscramError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(PixscramError::TargetNotSet);
        };
        let Some(key) = self.key else {
            return Err(PixscramError::KeyNotSet);
        };

        let mut s = Scrambler::new();
        s.use_media(&image)?.save_as(&output).with_key(key);
        s.unscramble_and_save()?;

        Ok(())
    }
}
