use std::path::{Path, PathBuf};

use crate::{Key, PixscramError, Scrambler};

pub fn prepare() -> ScrambleApi {
    ScrambleApi::default()
}

#[derive(Default, Debug)]
pub struct ScrambleApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    key: Option<Key>,
}

impl ScrambleApi {
    /// This is the image whose pixels will be scrambled
    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// The scrambled image will be stored as this file
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the key the permutation is derived from
    pub fn with_key<K: Into<Key>>(mut self, key: K) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the key, `None` leaves the key unset
    pub fn use_key<K: Into<Key>>(mut self, key: Option<K>) -> Self {
        self.key = key.map(Into::into);
        self
    }

    /// Execute the scramble and block until the output file is written
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
        s.scramble_and_save()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::test_utils::prepare_gradient_image;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let plain = temp_dir.path().join("plain.png");
        prepare_gradient_image(8, 8)
            .save(&plain)
            .expect("Failed to write plain image");

        crate::api::scramble::prepare()
            .with_image(&plain)
            .with_key("SuperSecret42")
            .with_output(temp_dir.path().join("encrypted.png"))
            .execute()
            .expect("Failed to scramble image");

        assert!(temp_dir.path().join("encrypted.png").exists());
    }

    #[test]
    fn should_fail_without_a_key() {
        let result = crate::api::scramble::prepare()
            .with_image("plain.png")
            .with_output("encrypted.png")
            .execute();

        assert!(matches!(result, Err(crate::PixscramError::KeyNotSet)));
    }
}
