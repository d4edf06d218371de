//! Disjunctive (1-of-n) plaintext equality proof.
//!
//! Proves that a ciphertext `c` hides the same plaintext as at least one of the
//! alternatives `c'_0 .. c'_{n-1}` without revealing which. The prover simulates every
//! branch it cannot prove by picking the response and sub-challenge first and solving
//! for the commitment, commits honestly on the real branch `j`, and is then forced to
//! accept `challenge_j = master - sum(challenge_i, i != j)`.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use crate::elgamal::{Ciphertext, PublicKey};
use crate::primitives::Transcript;

/// Transcript of a disjunctive plaintext equality proof.
///
/// All three vectors are indexed by alternative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisjunctiveProof {
    commitments: Vec<(BigUint, BigUint)>,
    responses: Vec<BigUint>,
    challenges: Vec<BigUint>,
}

impl DisjunctiveProof {
    /// Creates a proof from its components.
    pub fn new(
        commitments: Vec<(BigUint, BigUint)>,
        responses: Vec<BigUint>,
        challenges: Vec<BigUint>,
    ) -> Self {
        Self {
            commitments,
            responses,
            challenges,
        }
    }

    /// Returns the commitment pairs `t_i`.
    pub fn commitments(&self) -> &[(BigUint, BigUint)] {
        &self.commitments
    }

    /// Returns the responses `res_i`.
    pub fn responses(&self) -> &[BigUint] {
        &self.responses
    }

    /// Returns the sub-challenges `challenge_i`.
    pub fn challenges(&self) -> &[BigUint] {
        &self.challenges
    }
}

/// Precomputed `a^-1` and `b^-1` for the ciphertext every alternative is compared to.
struct Quotients<'a> {
    key: &'a PublicKey,
    a_inv: BigUint,
    b_inv: BigUint,
}

impl<'a> Quotients<'a> {
    fn new(key: &'a PublicKey, c: &Ciphertext) -> Self {
        let group = key.group();
        Self {
            key,
            a_inv: group.inv(c.a()),
            b_inv: group.inv(c.b()),
        }
    }

    /// Commitment pair `(g^res * (a'/a)^ch, y^res * (b'/b)^ch)`.
    fn commitment(
        &self,
        alternative: &Ciphertext,
        response: &BigUint,
        challenge: &BigUint,
    ) -> (BigUint, BigUint) {
        let group = self.key.group();
        let a_hat = group.mul(alternative.a(), &self.a_inv);
        let b_hat = group.mul(alternative.b(), &self.b_inv);
        let t1 = group.mul(
            &group.pow(self.key.g(), response),
            &group.pow(&a_hat, challenge),
        );
        let t2 = group.mul(
            &group.pow(self.key.y(), response),
            &group.pow(&b_hat, challenge),
        );
        (t1, t2)
    }
}

/// Master challenge over `[c.a, c'_i.a.., c.b, c'_i.b.., t_i.0.., t_i.1..]`.
fn master_challenge(
    key: &PublicKey,
    c: &Ciphertext,
    alternatives: &[Ciphertext],
    commitments: &[(BigUint, BigUint)],
) -> BigUint {
    let mut transcript = Transcript::new();
    transcript.append(c.a());
    transcript.append_all(alternatives.iter().map(Ciphertext::a));
    transcript.append(c.b());
    transcript.append_all(alternatives.iter().map(Ciphertext::b));
    transcript.append_all(commitments.iter().map(|(t1, _)| t1));
    transcript.append_all(commitments.iter().map(|(_, t2)| t2));
    transcript.challenge_scalar(key.group())
}

/// Proves that `c` (randomness `r`) is plaintext equal to `alternatives[j]`
/// (randomness `r_j`) while hiding `j`.
///
/// An out-of-range `j` or a wrong `r_j` does not panic; the resulting transcript just
/// fails verification.
pub fn prove_plaintext_equality_or<R: RngCore + CryptoRng>(
    rng: &mut R,
    key: &PublicKey,
    c: &Ciphertext,
    r: &BigUint,
    alternatives: &[Ciphertext],
    j: usize,
    r_j: &BigUint,
) -> DisjunctiveProof {
    let group = key.group();
    let n = alternatives.len();
    let quotients = Quotients::new(key, c);

    let mut commitments = Vec::with_capacity(n);
    let mut responses = Vec::with_capacity(n);
    let mut challenges = Vec::with_capacity(n);

    // simulated branches; position j is a placeholder until the real pass below
    for (i, alternative) in alternatives.iter().enumerate() {
        if i == j {
            commitments.push((BigUint::zero(), BigUint::zero()));
            responses.push(BigUint::zero());
            challenges.push(BigUint::zero());
            continue;
        }
        let response = group.random_scalar(rng);
        let challenge = group.random_scalar(rng);
        commitments.push(quotients.commitment(alternative, &response, &challenge));
        responses.push(response);
        challenges.push(challenge);
    }

    let w_j = group.random_scalar(rng);
    if j < n {
        commitments[j] = (group.pow_g(&w_j), group.pow(key.y(), &w_j));
    } else {
        debug!(j, n, "real branch index out of range, every branch is simulated");
    }

    let master = master_challenge(key, c, alternatives, &commitments);

    if j < n {
        let simulated_sum = challenges
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != j)
            .fold(BigUint::zero(), |acc, (_, ch)| group.scalar_add(&acc, ch));
        let challenge_j = group.scalar_sub(&master, &simulated_sum);
        let r_hat = group.scalar_sub(r_j, r);
        responses[j] = group.scalar_sub(&w_j, &group.scalar_mul(&r_hat, &challenge_j));
        challenges[j] = challenge_j;
    }

    DisjunctiveProof::new(commitments, responses, challenges)
}

/// Verifies that `c` is plaintext equal to at least one of `alternatives`.
pub fn verify_plaintext_equality_or(
    proof: &DisjunctiveProof,
    key: &PublicKey,
    c: &Ciphertext,
    alternatives: &[Ciphertext],
) -> bool {
    let n = alternatives.len();
    if n == 0
        || proof.commitments.len() != n
        || proof.responses.len() != n
        || proof.challenges.len() != n
    {
        debug!(
            alternatives = n,
            commitments = proof.commitments.len(),
            responses = proof.responses.len(),
            challenges = proof.challenges.len(),
            "disjunctive proof rejected: malformed transcript"
        );
        return false;
    }

    let group = key.group();
    let master = master_challenge(key, c, alternatives, &proof.commitments);
    let sum = proof
        .challenges
        .iter()
        .fold(BigUint::zero(), |acc, ch| group.scalar_add(&acc, ch));
    if sum != master {
        debug!("disjunctive proof rejected: sub-challenges do not sum to the master challenge");
        return false;
    }

    let quotients = Quotients::new(key, c);
    for (i, alternative) in alternatives.iter().enumerate() {
        let expected =
            quotients.commitment(alternative, &proof.responses[i], &proof.challenges[i]);
        if expected != proof.commitments[i] {
            debug!(index = i, "disjunctive proof rejected: branch equation failed");
            return false;
        }
    }

    true
}
