/// Serializable group parameters.
pub mod config;
/// Prime-order subgroups of `Z_p^*`.
pub mod schnorr;

pub use config::GroupConfig;
pub use schnorr::SchnorrGroup;
