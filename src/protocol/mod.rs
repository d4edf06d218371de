/// Proof that a ciphertext decrypts to a public plaintext.
pub mod decryption;
/// Chaum-Pedersen discrete log equality proof.
pub mod dleq;
/// 1-of-n plaintext equality proof.
pub mod disjunctive;
/// Discrete log / double discrete log equality proof.
pub mod double_dlog;
/// Knowledge of the discrete log of an encrypted plaintext.
pub mod plaintext_dlog;
/// Plaintext equality of two ciphertexts.
pub mod plaintext_equality;

pub use decryption::{prove_correct_decryption, verify_correct_decryption};
pub use disjunctive::{
    prove_plaintext_equality_or, verify_plaintext_equality_or, DisjunctiveProof,
};
pub use dleq::{prove_dleq, verify_dleq, DleqProof};
pub use double_dlog::{
    prove_dl_equal_ddl, verify_dl_equal_ddl, DoubleDlogProof, DoubleDlogStatement, ROUNDS,
};
pub use plaintext_dlog::{prove_plaintext_dlog, verify_plaintext_dlog, PlaintextDlogProof};
pub use plaintext_equality::{prove_plaintext_equality, verify_plaintext_equality};
