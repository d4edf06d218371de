//! Proof that a discrete log equals a double discrete log across nested groups.
//!
//! The outer group has modulus `p` and order `q`; the inner group has modulus `q` and
//! order `r`, so `p = 2q + 1`. For public `A = h^x` (inner) and `B = g^(y^x mod q)`
//! (outer) the prover shows both hide the same `x`.
//!
//! A double exponentiation does not commute with a single challenge multiplication, so
//! the proof runs [`ROUNDS`] independent one-bit rounds. In round `i` the prover commits
//! to `w_i` and answers `w_i - c_i * x`; a one bit is verified against base `B` in place
//! of `g`, absorbing the unknown `y^x` factor. Soundness error is `2^-ROUNDS`.

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::primitives::{Transcript, CHALLENGE_BITS};
use crate::{Error, Result, SchnorrGroup};

/// Number of bit rounds, fixed by the challenge width.
pub const ROUNDS: usize = CHALLENGE_BITS;

/// Public values of a discrete log / double discrete log statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleDlogStatement {
    g: BigUint,
    h: BigUint,
    y: BigUint,
    a: BigUint,
    b: BigUint,
}

impl DoubleDlogStatement {
    /// Creates a statement from `g` (outer), `h`, `y`, `A` (inner) and `B` (outer).
    pub fn new(g: BigUint, h: BigUint, y: BigUint, a: BigUint, b: BigUint) -> Self {
        Self { g, h, y, a, b }
    }

    /// Computes `A = h^x` and `B = g^(y^x)` for the secret `x`.
    pub fn from_secret(
        outer: &SchnorrGroup,
        inner: &SchnorrGroup,
        g: BigUint,
        h: BigUint,
        y: BigUint,
        x: &BigUint,
    ) -> Self {
        let a = inner.pow(&h, x);
        let b = outer.pow(&g, &inner.pow(&y, x));
        Self { g, h, y, a, b }
    }

    /// Returns the outer generator `g`.
    pub fn g(&self) -> &BigUint {
        &self.g
    }

    /// Returns the inner base `h`.
    pub fn h(&self) -> &BigUint {
        &self.h
    }

    /// Returns the inner base `y`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Returns `A = h^x mod q`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Returns `B = g^(y^x mod q) mod p`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    fn validate(&self, outer: &SchnorrGroup, inner: &SchnorrGroup) -> Result<()> {
        if outer.modulus() != &(inner.modulus() * 2u32 + 1u32) {
            return Err(Error::InvalidParams(
                "Outer modulus must equal twice the inner modulus plus one".to_string(),
            ));
        }

        outer.validate_element(&self.g)?;
        outer.validate_element(&self.b)?;

        inner.validate_element(&self.h)?;
        inner.validate_element(&self.y)?;
        inner.validate_element(&self.a)?;

        Ok(())
    }

    fn challenge(&self, t_g: &[BigUint], t_h: &[BigUint]) -> Vec<bool> {
        let mut transcript = Transcript::new();
        transcript.append_all([&self.g, &self.h, &self.y, &self.a, &self.b]);
        transcript.append_all(t_g);
        transcript.append_all(t_h);
        transcript.challenge_bits()
    }
}

/// Transcript `(c_0..c_255, r_0..r_255)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoubleDlogProof {
    challenges: Vec<bool>,
    responses: Vec<BigUint>,
}

impl DoubleDlogProof {
    /// Creates a proof from its components.
    pub fn new(challenges: Vec<bool>, responses: Vec<BigUint>) -> Self {
        Self {
            challenges,
            responses,
        }
    }

    /// Returns the challenge bits.
    pub fn challenges(&self) -> &[bool] {
        &self.challenges
    }

    /// Returns the per-round responses.
    pub fn responses(&self) -> &[BigUint] {
        &self.responses
    }
}

#[cfg(feature = "parallel")]
fn per_round<T, F>(rounds: &[T], f: F) -> (Vec<BigUint>, Vec<BigUint>)
where
    T: Sync,
    F: Fn(&T) -> (BigUint, BigUint) + Send + Sync,
{
    rounds.par_iter().map(f).unzip()
}

#[cfg(not(feature = "parallel"))]
fn per_round<T, F>(rounds: &[T], f: F) -> (Vec<BigUint>, Vec<BigUint>)
where
    F: Fn(&T) -> (BigUint, BigUint),
{
    rounds.iter().map(f).unzip()
}

/// Proves that `log_h(A) = log_y(log_g(B)) = x`.
///
/// # Errors
///
/// Returns an error if the moduli are not nested (`p = 2q + 1`) or if any public value
/// lies outside its group.
pub fn prove_dl_equal_ddl<R: RngCore + CryptoRng>(
    rng: &mut R,
    outer: &SchnorrGroup,
    inner: &SchnorrGroup,
    statement: &DoubleDlogStatement,
    x: &BigUint,
) -> Result<DoubleDlogProof> {
    statement.validate(outer, inner)?;

    let nonces: Vec<BigUint> = (0..ROUNDS).map(|_| inner.random_scalar(rng)).collect();

    let (t_g, t_h) = per_round(&nonces, |w| {
        let t_g = outer.pow(&statement.g, &inner.pow(&statement.y, w));
        let t_h = inner.pow(&statement.h, w);
        (t_g, t_h)
    });

    let challenges = statement.challenge(&t_g, &t_h);

    let responses = nonces
        .iter()
        .zip(&challenges)
        .map(|(w, c)| {
            if *c {
                inner.scalar_sub(w, x)
            } else {
                w.clone()
            }
        })
        .collect();

    trace!(rounds = ROUNDS, "double dlog proof generated");

    Ok(DoubleDlogProof::new(challenges, responses))
}

/// Verifies a discrete log / double discrete log equality proof.
///
/// Rejects transcripts without exactly [`ROUNDS`] challenges and responses, and
/// statements that violate the group preconditions.
pub fn verify_dl_equal_ddl(
    proof: &DoubleDlogProof,
    outer: &SchnorrGroup,
    inner: &SchnorrGroup,
    statement: &DoubleDlogStatement,
) -> bool {
    if proof.challenges.len() != ROUNDS || proof.responses.len() != ROUNDS {
        debug!(
            challenges = proof.challenges.len(),
            responses = proof.responses.len(),
            "double dlog proof rejected: wrong number of rounds"
        );
        return false;
    }

    if let Err(e) = statement.validate(outer, inner) {
        debug!(error = %e, "double dlog proof rejected: invalid statement");
        return false;
    }

    let rounds: Vec<(bool, &BigUint)> = proof
        .challenges
        .iter()
        .copied()
        .zip(&proof.responses)
        .collect();

    let (t_g, t_h) = per_round(&rounds, |(c, res)| {
        let base = if *c { &statement.b } else { &statement.g };
        let t_g = outer.pow(base, &inner.pow(&statement.y, res));
        let t_h = if *c {
            inner.mul(&inner.pow(&statement.h, res), &statement.a)
        } else {
            inner.pow(&statement.h, res)
        };
        (t_g, t_h)
    });

    if statement.challenge(&t_g, &t_h) != proof.challenges {
        debug!("double dlog proof rejected: challenge bits do not match");
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SecureRng;

    fn n(v: u64) -> BigUint {
        BigUint::from(v)
    }

    /// Cunningham chain 11, 23, 47.
    fn toy_groups() -> (SchnorrGroup, SchnorrGroup) {
        let outer = SchnorrGroup::new(n(47), n(23), n(4)).unwrap();
        let inner = SchnorrGroup::new(n(23), n(11), n(4)).unwrap();
        (outer, inner)
    }

    #[test]
    fn honest_proof_verifies_for_every_secret() {
        let (outer, inner) = toy_groups();
        let mut rng = SecureRng::new();

        for x in 0u64..11 {
            let x = n(x);
            let statement = DoubleDlogStatement::from_secret(&outer, &inner, n(4), n(2), n(9), &x);
            let proof = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &x).unwrap();
            assert_eq!(proof.challenges().len(), ROUNDS);
            assert!(verify_dl_equal_ddl(&proof, &outer, &inner, &statement));
        }
    }

    #[test]
    fn flipped_response_bit_is_rejected() {
        let (outer, inner) = toy_groups();
        let mut rng = SecureRng::new();
        let x = n(6);
        let statement = DoubleDlogStatement::from_secret(&outer, &inner, n(4), n(2), n(9), &x);
        let proof = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &x).unwrap();

        let mut responses = proof.responses().to_vec();
        responses[17] ^= BigUint::from(1u32);
        let tampered = DoubleDlogProof::new(proof.challenges().to_vec(), responses);
        assert!(!verify_dl_equal_ddl(&tampered, &outer, &inner, &statement));
    }

    #[test]
    fn flipped_challenge_bit_is_rejected() {
        let (outer, inner) = toy_groups();
        let mut rng = SecureRng::new();
        let x = n(6);
        let statement = DoubleDlogStatement::from_secret(&outer, &inner, n(4), n(2), n(9), &x);
        let proof = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &x).unwrap();

        let mut challenges = proof.challenges().to_vec();
        challenges[200] = !challenges[200];
        let tampered = DoubleDlogProof::new(challenges, proof.responses().to_vec());
        assert!(!verify_dl_equal_ddl(&tampered, &outer, &inner, &statement));
    }

    #[test]
    fn wrong_round_count_is_rejected() {
        let (outer, inner) = toy_groups();
        let mut rng = SecureRng::new();
        let x = n(3);
        let statement = DoubleDlogStatement::from_secret(&outer, &inner, n(4), n(2), n(9), &x);
        let proof = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &x).unwrap();

        let short = DoubleDlogProof::new(
            proof.challenges()[..ROUNDS - 1].to_vec(),
            proof.responses()[..ROUNDS - 1].to_vec(),
        );
        assert!(!verify_dl_equal_ddl(&short, &outer, &inner, &statement));
    }

    #[test]
    fn unnested_groups_are_refused() {
        let outer = SchnorrGroup::new(n(23), n(11), n(4)).unwrap();
        let inner = SchnorrGroup::new(n(23), n(11), n(4)).unwrap();
        let statement = DoubleDlogStatement::new(n(4), n(2), n(9), n(4), n(4));
        let mut rng = SecureRng::new();

        let result = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &n(1));
        assert!(matches!(result, Err(Error::InvalidParams(_))));

        let proof = DoubleDlogProof::new(vec![false; ROUNDS], vec![n(0); ROUNDS]);
        assert!(!verify_dl_equal_ddl(&proof, &outer, &inner, &statement));
    }

    #[test]
    fn non_member_statement_is_refused() {
        let (outer, inner) = toy_groups();
        let mut rng = SecureRng::new();
        // 5 is not a quadratic residue mod 23
        let statement = DoubleDlogStatement::new(n(4), n(2), n(9), n(5), n(4));
        let result = prove_dl_equal_ddl(&mut rng, &outer, &inner, &statement, &n(1));
        assert!(matches!(result, Err(Error::InvalidGroupElement(_))));
    }
}
