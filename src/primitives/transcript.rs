//! Fiat-Shamir challenge derivation.
//!
//! Every public value is absorbed as its canonical decimal representation (no sign,
//! no leading zeros, `"0"` for zero) and the encodings are concatenated without
//! separators or length prefixes before hashing with SHA-256. The encoding is part of
//! the proof format: changing it breaks verification of transcripts produced
//! elsewhere, ambiguity included (`[12, 3]` and `[1, 23]` hash identically).

use num_bigint::BigUint;
use sha2::{Digest, Sha256};

use crate::groups::SchnorrGroup;

/// Number of challenge bits produced by [`bit_challenge`].
pub const CHALLENGE_BITS: usize = 256;

/// Incremental Fiat-Shamir transcript.
///
/// Absorbing values one by one is equivalent to passing the same ordered list to
/// [`scalar_challenge`] or [`bit_challenge`].
#[derive(Clone, Debug, Default)]
pub struct Transcript(Sha256);

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self(Sha256::new())
    }

    /// Appends one public value.
    pub fn append(&mut self, value: &BigUint) {
        self.0.update(value.to_str_radix(10).as_bytes());
    }

    /// Appends every value of `values`, in iteration order.
    pub fn append_all<'a, I>(&mut self, values: I)
    where
        I: IntoIterator<Item = &'a BigUint>,
    {
        for value in values {
            self.append(value);
        }
    }

    /// Finalizes into a scalar challenge in `[0, q)`.
    ///
    /// The digest is read as a little-endian unsigned integer before reduction.
    pub fn challenge_scalar(self, group: &SchnorrGroup) -> BigUint {
        let digest = self.0.finalize();
        BigUint::from_bytes_le(&digest) % group.order()
    }

    /// Finalizes into [`CHALLENGE_BITS`] challenge bits.
    ///
    /// Bits are taken least-significant first within each byte, bytes in digest order.
    pub fn challenge_bits(self) -> Vec<bool> {
        let digest = self.0.finalize();
        digest
            .iter()
            .flat_map(|byte| (0..8u32).map(move |i| (byte >> i) & 1 == 1))
            .collect()
    }
}

/// Derives a scalar challenge modulo the group order from an ordered list of values.
pub fn scalar_challenge<'a, I>(group: &SchnorrGroup, values: I) -> BigUint
where
    I: IntoIterator<Item = &'a BigUint>,
{
    let mut transcript = Transcript::new();
    transcript.append_all(values);
    transcript.challenge_scalar(group)
}

/// Derives a 256-bit challenge vector from an ordered list of values.
pub fn bit_challenge<'a, I>(values: I) -> Vec<bool>
where
    I: IntoIterator<Item = &'a BigUint>,
{
    let mut transcript = Transcript::new();
    transcript.append_all(values);
    transcript.challenge_bits()
}
