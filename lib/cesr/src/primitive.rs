use crate::{Error, PrimitiveClass, Result};
use std::{fmt, str::FromStr};

/// Codes used by the HTTP signing scheme
pub mod code {
    /// Ed25519 private key seed
    pub const ED25519_SEED: &str = "A";

    /// Ed25519 public key that can't be rotated (non-transferable identifier)
    pub const ED25519_NON_TRANSFERABLE: &str = "B";

    /// Ed25519 public key
    pub const ED25519: &str = "D";

    /// Ed25519 signature
    pub const ED25519_SIGNATURE: &str = "0B";
}

/// Typed primitive
///
/// Construction guarantees that the code and the payload length agree,
/// so rendering it into text and parsing it back is lossless.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Primitive {
    code: String,
    class: PrimitiveClass,
    payload: Vec<u8>,
}

impl Primitive {
    /// Frame the payload with the given code
    pub fn new(code: &str, payload: impl Into<Vec<u8>>) -> Result<Self> {
        let payload = payload.into();
        let class = PrimitiveClass::of_code(code)
            .filter(|class| class.payload_len() == payload.len())
            .ok_or_else(|| Error::IncompatiblePrefix {
                code: code.to_string(),
                payload_len: payload.len(),
            })?;

        Ok(Self {
            code: code.to_string(),
            class,
            payload,
        })
    }

    /// Type code of the primitive
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Size class of the primitive
    #[must_use]
    pub fn class(&self) -> PrimitiveClass {
        self.class
    }

    /// Raw payload
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Take the raw payload out of the primitive
    #[must_use]
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode_raw(&self.payload, &self.code))
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (class, payload) = crate::decode_with_class(s)?;

        Ok(Self {
            code: s[..class.code_len()].to_string(),
            class,
            payload,
        })
    }
}
