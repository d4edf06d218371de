//! Proof of knowledge of the discrete log of an encrypted plaintext.
//!
//! For `c = (a, b) = (g^r, y^r * h^x)` the prover shows knowledge of both `x` and `r`
//! through two Schnorr relations sharing the `r` response:
//! `h^res1 * y^res2 = t1 * b^c` and `g^res2 = t2 * a^c`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::elgamal::{Ciphertext, PublicKey};
use crate::primitives::scalar_challenge;

/// Transcript `(t1, t2, res1, res2)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaintextDlogProof {
    t1: BigUint,
    t2: BigUint,
    response1: BigUint,
    response2: BigUint,
}

impl PlaintextDlogProof {
    /// Creates a proof from its components.
    pub fn new(t1: BigUint, t2: BigUint, response1: BigUint, response2: BigUint) -> Self {
        Self {
            t1,
            t2,
            response1,
            response2,
        }
    }

    /// Returns `t1 = h^w1 * y^w2`.
    pub fn t1(&self) -> &BigUint {
        &self.t1
    }

    /// Returns `t2 = g^w2`.
    pub fn t2(&self) -> &BigUint {
        &self.t2
    }

    /// Returns `res1 = w1 + c * x mod q`.
    pub fn response1(&self) -> &BigUint {
        &self.response1
    }

    /// Returns `res2 = w2 + c * r mod q`.
    pub fn response2(&self) -> &BigUint {
        &self.response2
    }
}

fn challenge(
    key: &PublicKey,
    c: &Ciphertext,
    h: &BigUint,
    t1: &BigUint,
    t2: &BigUint,
) -> BigUint {
    scalar_challenge(key.group(), [key.g(), h, key.y(), t1, t2, c.a(), c.b()])
}

/// Proves knowledge of `x` such that `c` (randomness `r`) encrypts `h^x`.
pub fn prove_plaintext_dlog<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &PublicKey,
    c: &Ciphertext,
    h: &BigUint,
    x: &BigUint,
    r: &BigUint,
) -> PlaintextDlogProof {
    let group = key.group();

    let w1 = group.random_scalar(rng);
    let w2 = group.random_scalar(rng);

    let t1 = group.mul(&group.pow(h, &w1), &group.pow(key.y(), &w2));
    let t2 = group.pow_g(&w2);

    let ch = challenge(key, c, h, &t1, &t2);

    let response1 = group.scalar_add(&w1, &group.scalar_mul(&ch, x));
    let response2 = group.scalar_add(&w2, &group.scalar_mul(&ch, r));

    PlaintextDlogProof::new(t1, t2, response1, response2)
}

/// Verifies knowledge of the discrete log to base `h` of the plaintext of `c`.
pub fn verify_plaintext_dlog(
    proof: &PlaintextDlogProof,
    key: &PublicKey,
    c: &Ciphertext,
    h: &BigUint,
) -> bool {
    let group = key.group();
    let ch = challenge(key, c, h, &proof.t1, &proof.t2);

    let lhs1 = group.mul(
        &group.pow(h, &proof.response1),
        &group.pow(key.y(), &proof.response2),
    );
    let rhs1 = group.mul(&proof.t1, &group.pow(c.b(), &ch));

    let lhs2 = group.pow_g(&proof.response2);
    let rhs2 = group.mul(&proof.t2, &group.pow(c.a(), &ch));

    let check1 = lhs1 == rhs1;
    let check2 = lhs2 == rhs2;

    if !check1 || !check2 {
        debug!(check1, check2, "plaintext dlog proof rejected");
        return false;
    }

    true
}
