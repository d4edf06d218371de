//! Chaum-Pedersen proof of discrete logarithm equality.
//!
//! Proves knowledge of `alpha` with `h1 = g1^alpha` and `h2 = g2^alpha` without
//! revealing it.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::primitives::scalar_challenge;
use crate::SchnorrGroup;

/// Transcript `(t1, t2, res)` of a discrete log equality proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DleqProof {
    t1: BigUint,
    t2: BigUint,
    response: BigUint,
}

impl DleqProof {
    /// Creates a proof from its components.
    pub fn new(t1: BigUint, t2: BigUint, response: BigUint) -> Self {
        Self { t1, t2, response }
    }

    /// Returns the commitment `t1 = g1^w`.
    pub fn t1(&self) -> &BigUint {
        &self.t1
    }

    /// Returns the commitment `t2 = g2^w`.
    pub fn t2(&self) -> &BigUint {
        &self.t2
    }

    /// Returns the response `res = w - alpha * c mod q`.
    pub fn response(&self) -> &BigUint {
        &self.response
    }
}

/// Proves that `log_g1(h1) == log_g2(h2) == alpha`.
pub fn prove_dleq<R: RngCore + CryptoRng>(
    rng: &mut R,
    group: &SchnorrGroup,
    g1: &BigUint,
    h1: &BigUint,
    g2: &BigUint,
    h2: &BigUint,
    alpha: &BigUint,
) -> DleqProof {
    let w = group.random_scalar(rng);

    let t1 = group.pow(g1, &w);
    let t2 = group.pow(g2, &w);

    let c = scalar_challenge(group, [h1, h2, &t1, &t2]);
    let response = group.scalar_sub(&w, &group.scalar_mul(alpha, &c));

    DleqProof::new(t1, t2, response)
}

/// Verifies a discrete log equality proof.
///
/// Checks `t1 = g1^res * h1^c` and `t2 = g2^res * h2^c` modulo `p`.
pub fn verify_dleq(
    proof: &DleqProof,
    group: &SchnorrGroup,
    g1: &BigUint,
    h1: &BigUint,
    g2: &BigUint,
    h2: &BigUint,
) -> bool {
    let c = scalar_challenge(group, [h1, h2, &proof.t1, &proof.t2]);

    let rhs1 = group.mul(&group.pow(g1, &proof.response), &group.pow(h1, &c));
    let rhs2 = group.mul(&group.pow(g2, &proof.response), &group.pow(h2, &c));

    let check1 = proof.t1 == rhs1;
    let check2 = proof.t2 == rhs2;

    if !check1 || !check2 {
        debug!(check1, check2, "dleq proof rejected");
        return false;
    }

    true
}
