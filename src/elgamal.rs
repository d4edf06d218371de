//! ElGamal encryption over a [`SchnorrGroup`].
//!
//! Plaintexts are group elements. Encryption of `m` under `y = g^x` with randomness
//! `r` is `(a, b) = (g^r, y^r * m)`. The proofs in [`crate::protocol`] need the
//! randomness, so [`PublicKey::encrypt`] hands it back to the caller.

use core::fmt;

use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};

use crate::{Result, SchnorrGroup};

/// ElGamal public key `(g, y = g^x)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    group: SchnorrGroup,
    y: BigUint,
}

impl PublicKey {
    /// Creates a public key from an existing `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `y` is not an element of the group.
    pub fn new(group: SchnorrGroup, y: BigUint) -> Result<Self> {
        group.validate_element(&y)?;
        Ok(Self { group, y })
    }

    /// Returns the group the key lives in.
    pub fn group(&self) -> &SchnorrGroup {
        &self.group
    }

    /// Returns the generator `g`.
    pub fn g(&self) -> &BigUint {
        self.group.generator()
    }

    /// Returns the public value `y`.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Encrypts `m` with fresh randomness, returning the ciphertext and the randomness.
    pub fn encrypt<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        m: &BigUint,
    ) -> Result<(Ciphertext, BigUint)> {
        let r = self.group.random_scalar(rng);
        let ciphertext = self.encrypt_with_randomness(m, &r)?;
        Ok((ciphertext, r))
    }

    /// Encrypts `m` with caller-chosen randomness `r`.
    ///
    /// # Errors
    ///
    /// Returns an error if `m` is not an element of the group.
    pub fn encrypt_with_randomness(&self, m: &BigUint, r: &BigUint) -> Result<Ciphertext> {
        self.group.validate_element(m)?;
        let a = self.group.pow_g(r);
        let b = self.group.mul(&self.group.pow(&self.y, r), m);
        Ok(Ciphertext { a, b })
    }
}

/// ElGamal key pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Keypair {
    public: PublicKey,
    x: BigUint,
}

impl Keypair {
    /// Generates a fresh key pair.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, group: SchnorrGroup) -> Self {
        let x = group.random_scalar(rng);
        Self::from_secret(group, x)
    }

    /// Derives the key pair for secret exponent `x`.
    pub fn from_secret(group: SchnorrGroup, x: BigUint) -> Self {
        let x = group.scalar_reduce(&x);
        let y = group.pow_g(&x);
        Self {
            public: PublicKey { group, y },
            x,
        }
    }

    /// Returns the public half.
    pub fn public(&self) -> &PublicKey {
        &self.public
    }

    /// Returns the secret exponent `x`.
    pub fn secret(&self) -> &BigUint {
        &self.x
    }

    /// Decrypts `c` as `b / a^x`.
    pub fn decrypt(&self, c: &Ciphertext) -> BigUint {
        let group = self.public.group();
        group.div(&c.b, &group.pow(&c.a, &self.x))
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public", &self.public)
            .field("x", &"<redacted>")
            .finish()
    }
}

/// ElGamal ciphertext `(a, b)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    a: BigUint,
    b: BigUint,
}

impl Ciphertext {
    /// Creates a ciphertext from its components.
    pub fn new(a: BigUint, b: BigUint) -> Self {
        Self { a, b }
    }

    /// Returns `a = g^r`.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Returns `b = y^r * m`.
    pub fn b(&self) -> &BigUint {
        &self.b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, SecureRng};

    fn toy() -> SchnorrGroup {
        SchnorrGroup::new(23u32.into(), 11u32.into(), 4u32.into()).unwrap()
    }

    #[test]
    fn encrypt_then_decrypt() {
        let mut rng = SecureRng::new();
        let keypair = Keypair::generate(&mut rng, toy());
        for m in [1u32, 2, 3, 9, 13] {
            let m = BigUint::from(m);
            let (c, _) = keypair.public().encrypt(&mut rng, &m).unwrap();
            assert_eq!(keypair.decrypt(&c), m);
        }
    }

    #[test]
    fn known_toy_ciphertext() {
        let keypair = Keypair::from_secret(toy(), 3u32.into());
        // y = 4^3 = 64 = 18 mod 23
        assert_eq!(keypair.public().y(), &BigUint::from(18u32));

        let c = keypair
            .public()
            .encrypt_with_randomness(&9u32.into(), &2u32.into())
            .unwrap();
        // a = 4^2 = 16, b = 18^2 * 9 = 2916 = 18 mod 23
        assert_eq!(c.a(), &BigUint::from(16u32));
        assert_eq!(c.b(), &BigUint::from(18u32));
        assert_eq!(keypair.decrypt(&c), BigUint::from(9u32));
    }

    #[test]
    fn rejects_non_element_plaintext() {
        let keypair = Keypair::from_secret(toy(), 5u32.into());
        let result = keypair
            .public()
            .encrypt_with_randomness(&5u32.into(), &1u32.into());
        assert!(matches!(result, Err(Error::InvalidGroupElement(_))));
    }

    #[test]
    fn debug_hides_secret() {
        let keypair = Keypair::from_secret(toy(), 7u32.into());
        let rendered = format!("{keypair:?}");
        assert!(rendered.contains("<redacted>"));
    }
}
