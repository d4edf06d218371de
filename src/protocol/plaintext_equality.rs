//! Proof that two ciphertexts under the same key hide the same plaintext.
//!
//! Dividing `c' = (a', b')` by `c = (a, b)` componentwise cancels equal plaintexts and
//! leaves `(g^(r'-r), y^(r'-r))`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use super::dleq::{prove_dleq, verify_dleq, DleqProof};
use crate::elgamal::{Ciphertext, PublicKey};

fn quotient(key: &PublicKey, c: &Ciphertext, c_prime: &Ciphertext) -> (BigUint, BigUint) {
    let group = key.group();
    (group.div(c_prime.a(), c.a()), group.div(c_prime.b(), c.b()))
}

/// Proves that `c` (randomness `r`) and `c_prime` (randomness `r_prime`) encrypt the
/// same plaintext.
pub fn prove_plaintext_equality<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &PublicKey,
    c: &Ciphertext,
    r: &BigUint,
    c_prime: &Ciphertext,
    r_prime: &BigUint,
) -> DleqProof {
    let group = key.group();
    let r_hat = group.scalar_sub(r_prime, r);
    let (a_hat, b_hat) = quotient(key, c, c_prime);
    prove_dleq(rng, group, key.g(), &a_hat, key.y(), &b_hat, &r_hat)
}

/// Verifies a plaintext equality proof for `c` and `c_prime`.
pub fn verify_plaintext_equality(
    proof: &DleqProof,
    key: &PublicKey,
    c: &Ciphertext,
    c_prime: &Ciphertext,
) -> bool {
    let (a_hat, b_hat) = quotient(key, c, c_prime);
    verify_dleq(proof, key.group(), key.g(), &a_hat, key.y(), &b_hat)
}
