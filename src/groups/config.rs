use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use super::SchnorrGroup;
use crate::{Error, Result};

/// Serializable description of a [`SchnorrGroup`].
///
/// Values are big-endian hex strings, with or without a `0x` prefix.
///
/// ```rust
/// use elgamal_zkp::GroupConfig;
///
/// let config: GroupConfig = serde_json::from_str(r#"{"p": "17", "q": "0b", "g": "04"}"#).unwrap();
/// let group = config.build().unwrap();
/// assert_eq!(group.order(), &num_bigint::BigUint::from(11u32));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Modulus `p`.
    pub p: String,
    /// Subgroup order `q`.
    pub q: String,
    /// Generator `g`.
    pub g: String,
}

impl GroupConfig {
    /// Describes an existing group.
    pub fn from_group(group: &SchnorrGroup) -> Self {
        Self {
            p: encode(group.modulus()),
            q: encode(group.order()),
            g: encode(group.generator()),
        }
    }

    /// Decodes and validates the group.
    pub fn build(&self) -> Result<SchnorrGroup> {
        SchnorrGroup::new(
            decode("p", &self.p)?,
            decode("q", &self.q)?,
            decode("g", &self.g)?,
        )
    }
}

fn encode(value: &BigUint) -> String {
    hex::encode(value.to_bytes_be())
}

fn decode(field: &str, value: &str) -> Result<BigUint> {
    let digits = value.trim().trim_start_matches("0x");
    let padded = if digits.len() % 2 == 1 {
        format!("0{digits}")
    } else {
        digits.to_string()
    };
    let bytes = hex::decode(&padded)
        .map_err(|e| Error::InvalidConfig(format!("field `{field}` is not valid hex: {e}")))?;
    if bytes.is_empty() {
        return Err(Error::InvalidConfig(format!("field `{field}` is empty")));
    }
    Ok(BigUint::from_bytes_be(&bytes))
}
