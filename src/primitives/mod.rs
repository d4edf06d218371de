//! Core primitives shared by every proof.
//!
//! - **rng**: secure randomness and uniform sampling
//! - **transcript**: Fiat-Shamir challenge derivation

/// Cryptographically secure random number generation.
pub mod rng;
/// Fiat-Shamir challenge derivation.
pub mod transcript;

pub use rng::{random_below, SecureRng};
pub use transcript::{bit_challenge, scalar_challenge, Transcript, CHALLENGE_BITS};
