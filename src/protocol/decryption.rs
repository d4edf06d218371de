//! Proof that a ciphertext decrypts to a public plaintext.
//!
//! For `c = (a, b)` encrypting `m` with randomness `r`, both `a = g^r` and
//! `b / m = y^r`, so correct decryption reduces to a discrete log equality proof.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use super::dleq::{prove_dleq, verify_dleq, DleqProof};
use crate::elgamal::{Ciphertext, PublicKey};

/// Proves that `c` decrypts to `m`, using the encryption randomness `r`.
pub fn prove_correct_decryption<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &PublicKey,
    c: &Ciphertext,
    m: &BigUint,
    r: &BigUint,
) -> DleqProof {
    let group = key.group();
    let b_over_m = group.div(c.b(), m);
    prove_dleq(rng, group, key.g(), c.a(), key.y(), &b_over_m, r)
}

/// Verifies that `c` decrypts to `m`.
pub fn verify_correct_decryption(
    proof: &DleqProof,
    key: &PublicKey,
    c: &Ciphertext,
    m: &BigUint,
) -> bool {
    let group = key.group();
    let b_over_m = group.div(c.b(), m);
    verify_dleq(proof, group, key.g(), c.a(), key.y(), &b_over_m)
}
