use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::primitives::random_below;
use crate::{Error, Result};

/// Prime-order subgroup of `Z_p^*`.
///
/// Elements are residues in `[1, p)` whose order divides `q`; exponents (scalars) live
/// in `Z_q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchnorrGroup {
    p: BigUint,
    q: BigUint,
    g: BigUint,
}

impl SchnorrGroup {
    /// Creates a group from modulus `p`, subgroup order `q` and generator `g`.
    ///
    /// Primality of `p` and `q` is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `p` is not an odd integer greater than 3
    /// - `q` is smaller than 2 or does not divide `p - 1`
    /// - `g` is not a non-identity element of the order-`q` subgroup
    pub fn new(p: BigUint, q: BigUint, g: BigUint) -> Result<Self> {
        if p <= BigUint::from(3u32) || p.is_even() {
            return Err(Error::InvalidParams(
                "Modulus p must be an odd integer greater than 3".to_string(),
            ));
        }

        if q <= BigUint::one() {
            return Err(Error::InvalidParams(
                "Order q must be at least 2".to_string(),
            ));
        }

        if !(&p - 1u32).is_multiple_of(&q) {
            return Err(Error::InvalidParams("Order q must divide p - 1".to_string()));
        }

        let group = Self { p, q, g };
        group.validate_element(&group.g)?;

        if group.g.is_one() {
            return Err(Error::InvalidParams(
                "Generator g cannot be identity".to_string(),
            ));
        }

        Ok(group)
    }

    /// The RFC 5114 2048-bit MODP group with a 256-bit prime-order subgroup.
    pub fn rfc5114_2048_256() -> Self {
        Self {
            p: from_hex(RFC5114_P),
            q: from_hex(RFC5114_Q),
            g: from_hex(RFC5114_G),
        }
    }

    /// Returns the modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }

    /// Returns the subgroup order `q`.
    pub fn order(&self) -> &BigUint {
        &self.q
    }

    /// Returns the generator `g`.
    pub fn generator(&self) -> &BigUint {
        &self.g
    }

    /// Computes `base^exp mod p`.
    pub fn pow(&self, base: &BigUint, exp: &BigUint) -> BigUint {
        base.modpow(exp, &self.p)
    }

    /// Computes `g^exp mod p`.
    pub fn pow_g(&self, exp: &BigUint) -> BigUint {
        self.pow(&self.g, exp)
    }

    /// Multiplies two elements: `a * b mod p`.
    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.p
    }

    /// Computes the multiplicative inverse `a^-1 mod p`.
    ///
    /// Uses Fermat's little theorem, so `p` must be prime. Zero maps to zero.
    pub fn inv(&self, a: &BigUint) -> BigUint {
        a.modpow(&(&self.p - 2u32), &self.p)
    }

    /// Computes `a / b mod p`.
    pub fn div(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.mul(a, &self.inv(b))
    }

    /// Checks membership in the order-`q` subgroup.
    pub fn is_element(&self, x: &BigUint) -> bool {
        !x.is_zero() && x < &self.p && self.pow(x, &self.q).is_one()
    }

    /// Validates that `x` is an element of the order-`q` subgroup.
    pub fn validate_element(&self, x: &BigUint) -> Result<()> {
        if x.is_zero() || x >= &self.p {
            return Err(Error::InvalidGroupElement(
                "Element must lie in [1, p)".to_string(),
            ));
        }

        if !self.pow(x, &self.q).is_one() {
            return Err(Error::InvalidGroupElement(
                "Element is not in the correct subgroup".to_string(),
            ));
        }

        Ok(())
    }

    /// Samples a scalar uniformly from `[0, q)`.
    pub fn random_scalar<R: RngCore + CryptoRng>(&self, rng: &mut R) -> BigUint {
        random_below(rng, &self.q)
    }

    /// Reduces an arbitrary integer into `Z_q`.
    pub fn scalar_reduce(&self, s: &BigUint) -> BigUint {
        s % &self.q
    }

    /// Adds two scalars: `a + b mod q`.
    pub fn scalar_add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.q
    }

    /// Subtracts two scalars: `a - b mod q`.
    ///
    /// Operands may be unreduced; the result is always in `[0, q)`.
    pub fn scalar_sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let b = b % &self.q;
        (a % &self.q + &self.q - b) % &self.q
    }

    /// Multiplies two scalars: `a * b mod q`.
    pub fn scalar_mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.q
    }
}

fn from_hex(hex_str: &str) -> BigUint {
    BigUint::parse_bytes(hex_str.as_bytes(), 16)
        .unwrap_or_else(|| unreachable!("RFC 5114 constants are valid hex"))
}

const RFC5114_P: &str = "87A8E61DB4B6663CFFBBD19C651959998CEEF608660DD0F25D2CEED4435E3B00E00DF8F1D61957D4FAF7DF4561B2AA3016C3D91134096FAA3BF4296D830E9A7C209E0C6497517ABD5A8A9D306BCF67ED91F9E6725B4758C022E0B1EF4275BF7B6C5BFC11D45F9088B941F54EB1E59BB8BC39A0BF12307F5C4FDB70C581B23F76B63ACAE1CAA6B7902D52526735488A0EF13C6D9A51BFA4AB3AD8347796524D8EF6A167B5A41825D967E144E5140564251CCACB83E6B486F6B3CA3F7971506026C0B857F689962856DED4010ABD0BE621C3A3960A54E710C375F26375D7014103A4B54330C198AF126116D2276E11715F693877FAD7EF09CADB094AE91E1A1597";

const RFC5114_Q: &str = "8CF83642A709A097B447997640129DA299B1A47D1EB3750BA308B0FE64F5FBD3";

const RFC5114_G: &str = "3FB32C9B73134D0B2E77506660EDBD484CA7B18F21EF205407F4793A1A0BA12510DBC15077BE463FFF4FED4AAC0BB555BE3A6C1B0C6B47B1BC3773BF7E8C6F62901228F8C28CBB18A55AE31341000A650196F931C77A57F2DDF463E5E9EC144B777DE62AAAB8A8628AC376D282D6ED3864E67982428EBC831D14348F6F2F9193B5045AF2767164E1DFC967C1FB3F2E55A4BD1BFFE83B9C80D052B985D182EA0ADB2A3B7313D3FE14C8484B1E052588B9B7D2BBD2DF016199ECD06E1557CD0915B3353BBB64E0EC377FD028370DF92B52C7891428CDC67EB6184B523D1DB246C32F63078490F00EF8D647D148D47954515E2327CFEF98C582664B4C0F6CC41659";
