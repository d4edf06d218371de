//! Non-interactive zero-knowledge proofs over ElGamal encryption in prime-order groups.
//!
//! All proofs are Sigma protocols made non-interactive with the Fiat-Shamir transform
//! (see [`primitives::transcript`]):
//!
//! - [`prove_dleq`]: Chaum-Pedersen equality of two discrete logs
//! - [`prove_correct_decryption`]: a ciphertext decrypts to a public plaintext
//! - [`prove_plaintext_equality`]: two ciphertexts hide the same plaintext
//! - [`prove_plaintext_equality_or`]: a ciphertext matches one of several, hiding which
//! - [`prove_plaintext_dlog`]: knowledge of the discrete log of an encrypted plaintext
//! - [`prove_dl_equal_ddl`]: a discrete log equals a double discrete log across
//!   nested groups
//!
//! Provers take a caller-supplied CSPRNG and return an immutable transcript; verifiers
//! return `bool` and never fail otherwise.
//!
//! # Example
//!
//! ```rust
//! use elgamal_zkp::{
//!     prove_correct_decryption, verify_correct_decryption, Keypair, SchnorrGroup, SecureRng,
//! };
//! use num_bigint::BigUint;
//!
//! let mut rng = SecureRng::new();
//! let keypair = Keypair::generate(&mut rng, SchnorrGroup::rfc5114_2048_256());
//! let key = keypair.public();
//!
//! let m = key.group().pow_g(&BigUint::from(42u32));
//! let (c, r) = key.encrypt(&mut rng, &m).unwrap();
//!
//! let proof = prove_correct_decryption(&mut rng, key, &c, &m, &r);
//! assert!(verify_correct_decryption(&proof, key, &c, &m));
//! ```

#![warn(missing_docs)]

/// ElGamal keys and ciphertexts.
pub mod elgamal;
/// Error types.
pub mod error;
/// Prime-order groups and their configuration.
pub mod groups;
/// Randomness and Fiat-Shamir challenge derivation.
pub mod primitives;
/// Proof systems.
pub mod protocol;

pub use elgamal::{Ciphertext, Keypair, PublicKey};
pub use error::{Error, Result};
pub use groups::{GroupConfig, SchnorrGroup};
pub use primitives::{bit_challenge, scalar_challenge, SecureRng, Transcript};
pub use protocol::{
    prove_correct_decryption, prove_dl_equal_ddl, prove_dleq, prove_plaintext_dlog,
    prove_plaintext_equality, prove_plaintext_equality_or, verify_correct_decryption,
    verify_dl_equal_ddl, verify_dleq, verify_plaintext_dlog, verify_plaintext_equality,
    verify_plaintext_equality_or, DisjunctiveProof, DleqProof, DoubleDlogProof,
    DoubleDlogStatement, PlaintextDlogProof,
};
