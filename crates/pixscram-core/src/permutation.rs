//! Key-derived pixel permutations.
//!
//! A [`Permutation`] is a deterministic pseudo-random bijection on the index
//! range `[0, len)`. Scrambling moves the record at index `i` to its mapped
//! position, unscrambling pulls it back; both directions regenerate the same
//! permutation from the same `(seed, len)` pair instead of storing it.
//!
//! The generator is pinned: `fastrand::Rng::with_seed` (wyrand) driving an
//! in-place Fisher–Yates shuffle of the identity sequence. Changing either
//! the PRNG family or the shuffle order changes every permutation, which
//! makes previously scrambled images unrecoverable.

use fastrand::Rng;

use crate::error::PixscramError;
use crate::key::Key;
use crate::result::Result;

/// A deterministic bijection on `[0, len)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    /// forward[i] = destination index of the record at source index i
    forward: Vec<usize>,
}

impl Permutation {
    /// Generate the permutation for a seed and element count.
    ///
    /// Reproducible: the same `(seed, len)` yields the same permutation on
    /// every platform and in every run. `len == 0` yields the empty
    /// permutation, `len == 1` the identity on a single element.
    pub fn from_seed(seed: u64, len: usize) -> Self {
        let mut rng = Rng::with_seed(seed);

        let mut forward: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = rng.usize(0..=i);
            forward.swap(i, j);
        }

        Self { forward }
    }

    /// Generate the permutation a key derives for an element count.
    pub fn from_key(key: &Key, len: usize) -> Self {
        Self::from_seed(key.seed(), len)
    }

    /// Build a permutation from an externally supplied index sequence.
    ///
    /// Fails with [`PixscramError::InvalidPermutation`] unless every index in
    /// `[0, len)` occurs exactly once.
    pub fn from_indices(forward: Vec<usize>) -> Result<Self> {
        let len = forward.len();
        let mut seen = vec![false; len];
        for &destination in &forward {
            if destination >= len || seen[destination] {
                return Err(PixscramError::InvalidPermutation(len));
            }
            seen[destination] = true;
        }

        Ok(Self { forward })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The destination index of the record at `source`.
    #[inline]
    pub fn destination(&self, source: usize) -> usize {
        self.forward[source]
    }

    /// Scramble: the record at index `i` moves to `destination(i)`.
    ///
    /// Returns a new vector, the input is left untouched. Fails with
    /// [`PixscramError::ShapeMismatch`] when `records` and the permutation
    /// disagree in length.
    pub fn apply_forward<T: Clone>(&self, records: &[T]) -> Result<Vec<T>> {
        self.check_shape(records)?;

        let mut out = records.to_vec();
        for (source, &destination) in self.forward.iter().enumerate() {
            out[destination] = records[source].clone();
        }
        Ok(out)
    }

    /// Unscramble: the record at `destination(i)` moves back to index `i`.
    ///
    /// Exact inverse of [`apply_forward`](Self::apply_forward): for any
    /// records `P`, `apply_inverse(apply_forward(P)?)? == P`, element for
    /// element.
    pub fn apply_inverse<T: Clone>(&self, records: &[T]) -> Result<Vec<T>> {
        self.check_shape(records)?;

        let mut out = records.to_vec();
        for (source, &destination) in self.forward.iter().enumerate() {
            out[source] = records[destination].clone();
        }
        Ok(out)
    }

    fn check_shape<T>(&self, records: &[T]) -> Result<()> {
        if records.len() != self.forward.len() {
            return Err(PixscramError::ShapeMismatch {
                pixels: records.len(),
                permutation: self.forward.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_deterministic() {
        let p1 = Permutation::from_seed(294, 100);
        let p2 = Permutation::from_seed(294, 100);

        assert_eq!(p1, p2);
    }

    #[test]
    fn test_same_key_same_permutation() {
        let p1 = Permutation::from_key(&Key::from("abc"), 64);
        let p2 = Permutation::from_key(&Key::from("abc"), 64);

        assert_eq!(p1, p2);
    }

    #[test]
    fn test_different_seeds_differ() {
        // keys with different byte sums
        let p1 = Permutation::from_key(&Key::from("abc"), 100);
        let p2 = Permutation::from_key(&Key::from("abcd"), 100);

        let differences = (0..100)
            .filter(|&i| p1.destination(i) != p2.destination(i))
            .count();
        assert!(
            differences > 50,
            "Only {} differences, expected > 50",
            differences
        );
    }

    #[test]
    fn test_permutation_is_bijective() {
        let p = Permutation::from_seed(1234, 100);

        let mut seen = vec![false; 100];
        for i in 0..100 {
            let destination = p.destination(i);
            assert!(!seen[destination], "Duplicate destination {}", destination);
            seen[destination] = true;
        }
        assert!(seen.iter().all(|&x| x), "Not all indices covered");
    }

    #[test]
    fn test_forward_places_records_at_destination() {
        let p = Permutation::from_seed(7, 5);
        let records = vec!['a', 'b', 'c', 'd', 'e'];

        let scrambled = p.apply_forward(&records).unwrap();
        for (i, record) in records.iter().enumerate() {
            assert_eq!(scrambled[p.destination(i)], *record);
        }
    }

    #[test]
    fn test_round_trip_restores_records() {
        let p = Permutation::from_seed(294, 4);
        let pixels: Vec<[u8; 3]> = vec![[1, 2, 3], [4, 5, 6], [7, 8, 9], [10, 11, 12]];

        let scrambled = p.apply_forward(&pixels).unwrap();
        let restored = p.apply_inverse(&scrambled).unwrap();

        assert_eq!(restored, pixels);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let p = Permutation::from_seed(42, 6);
        let records = vec![0, 1, 2, 3, 4, 5];
        let copy = records.clone();

        let _ = p.apply_forward(&records).unwrap();
        let _ = p.apply_inverse(&records).unwrap();

        assert_eq!(records, copy);
    }

    #[test]
    fn test_empty_permutation() {
        let p = Permutation::from_seed(294, 0);
        assert!(p.is_empty());

        let none: Vec<u8> = Vec::new();
        assert_eq!(p.apply_forward(&none).unwrap(), none);
        assert_eq!(p.apply_inverse(&none).unwrap(), none);
    }

    #[test]
    fn test_single_element_is_identity() {
        let p = Permutation::from_seed(294, 1);
        assert_eq!(p.destination(0), 0);

        let one = vec![42u8];
        assert_eq!(p.apply_forward(&one).unwrap(), one);
        assert_eq!(p.apply_inverse(&one).unwrap(), one);
    }

    #[test]
    fn test_shape_mismatch_is_detected() {
        // a 2x2 permutation cannot map a 4x4 image
        let p = Permutation::from_seed(294, 4);
        let pixels = vec![[0u8; 3]; 16];

        match p.apply_forward(&pixels) {
            Err(PixscramError::ShapeMismatch {
                pixels: 16,
                permutation: 4,
            }) => (),
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
        assert!(matches!(
            p.apply_inverse(&pixels),
            Err(PixscramError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_from_indices_accepts_bijections() {
        let p = Permutation::from_indices(vec![2, 0, 1]).unwrap();
        assert_eq!(p.apply_forward(&['a', 'b', 'c']).unwrap(), ['b', 'c', 'a']);
    }

    #[test]
    fn test_from_indices_rejects_duplicates() {
        assert!(matches!(
            Permutation::from_indices(vec![0, 0, 1]),
            Err(PixscramError::InvalidPermutation(3))
        ));
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        assert!(matches!(
            Permutation::from_indices(vec![0, 1, 3]),
            Err(PixscramError::InvalidPermutation(3))
        ));
    }
}
