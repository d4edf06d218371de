//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use elgamal_zkp::SchnorrGroup;
use num_bigint::BigUint;

/// Initialize test tracing (call once at the beginning of tests).
///
/// Only logs from this crate are shown. Subsequent calls are safe and will be ignored.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::new("elgamal_zkp=debug");

    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(filter)
        .try_init();
}

pub fn n(v: u64) -> BigUint {
    BigUint::from(v)
}

/// p = 23, q = 11, g = 4.
pub fn toy_group() -> SchnorrGroup {
    SchnorrGroup::new(n(23), n(11), n(4)).expect("toy group is valid")
}

/// 65-bit safe prime group, large enough for statistical soundness checks.
pub fn safe_prime_group() -> SchnorrGroup {
    SchnorrGroup::new(
        BigUint::from(18446744073709554719u128),
        n(9223372036854777359),
        n(4),
    )
    .expect("safe prime group is valid")
}

/// Nested groups from the Cunningham chain 11, 23, 47: `(outer, inner)`.
pub fn toy_nested_groups() -> (SchnorrGroup, SchnorrGroup) {
    (
        SchnorrGroup::new(n(47), n(23), n(4)).expect("outer toy group is valid"),
        SchnorrGroup::new(n(23), n(11), n(4)).expect("inner toy group is valid"),
    )
}

/// Nested groups from the Cunningham chain r = 1099511629421, q = 2r + 1, p = 2q + 1.
pub fn nested_groups() -> (SchnorrGroup, SchnorrGroup) {
    (
        SchnorrGroup::new(n(4398046517687), n(2199023258843), n(4))
            .expect("outer group is valid"),
        SchnorrGroup::new(n(2199023258843), n(1099511629421), n(4))
            .expect("inner group is valid"),
    )
}
