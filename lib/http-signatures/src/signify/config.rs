use super::{SignatureFormat, DEFAULT_COMPONENTS};
use content_digest::{Algorithm, Padding};
use serde::{Deserialize, Serialize};

/// Signing configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SigningConfiguration {
    /// Components covered by the signature, in order
    pub components: Vec<String>,

    /// Algorithm of the `Content-Digest` header
    pub digest_algorithm: Algorithm,

    /// Padding of the `Content-Digest` header
    pub digest_padding: Padding,

    /// Format of the `Signature` header
    pub signature_format: SignatureFormat,

    /// Append `alg="ed25519"` to the signature input
    pub include_algorithm: bool,
}

impl Default for SigningConfiguration {
    fn default() -> Self {
        Self {
            components: DEFAULT_COMPONENTS.iter().map(ToString::to_string).collect(),
            digest_algorithm: Algorithm::default(),
            digest_padding: Padding::default(),
            signature_format: SignatureFormat::default(),
            include_algorithm: false,
        }
    }
}
