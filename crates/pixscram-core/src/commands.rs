use std::path::Path;

use crate::key::Key;
use crate::result::Result;

/// Scramble `image` with `key` and write the result to `output`.
pub fn scramble(image: &Path, output: &Path, key: Key) -> Result<()> {
    crate::api::scramble::prepare()
        .with_image(image)
        .with_output(output)
        .with_key(key)
        .execute()
}

/// Unscramble `image` with `key` and write the result to `output`.
///
/// The permutation is regenerated from the key and the image's pixel count,
/// it is never stored. A scrambled image that was resized or cropped in
/// between therefore unscrambles to a silently wrong arrangement, just like
/// a wrong key does.
pub fn unscramble(image: &Path, output: &Path, key: Key) -> Result<()> {
    crate::api::unscramble::prepare()
        .with_image(image)
        .with_output(output)
        .with_key(key)
        .execute()
}
