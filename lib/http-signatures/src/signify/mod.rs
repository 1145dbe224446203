//!
//! Signify flavoured HTTP message signatures
//!
//! Loosely follows RFC 9421. The signature base lists every covered component as `<name>: <value>`,
//! one per line, followed by the rendered `Signature-Input` value.
//!

use crate::crypto;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

mod config;
mod parse;
mod sign;
mod verify;

pub mod component;
pub mod easy;
pub mod signature_base;

pub use self::component::Component;
pub use self::config::SigningConfiguration;
pub use self::parse::{parse, signature_token, ParseError};
pub use self::sign::{Signer, SignerBuilder, SignerBuilderError};
pub use self::verify::verify;

/// Label the signature is stored under
pub const LABEL: &str = "signify";

/// Value of the optional `alg` parameter
pub const ALGORITHM: &str = "ed25519";

/// Components covered when nothing else is configured
pub const DEFAULT_COMPONENTS: &[&str] = &["@method", "@path", "origin-date", "signify-resource"];

/// Signify error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Component couldn't be resolved
    #[error(transparent)]
    #[diagnostic(transparent)]
    Component(#[from] component::Error),

    /// Signature couldn't be produced
    #[error(transparent)]
    #[diagnostic(transparent)]
    Crypto(#[from] crypto::Error),

    /// Header value contained non visible-ASCII characters
    #[error(transparent)]
    HeaderToStr(#[from] http::header::ToStrError),

    /// Computed header value is invalid
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Signature header doesn't carry a signature for the label
    #[error("Invalid signature header")]
    InvalidSignatureHeader,

    /// Signature input header failed to parse
    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidSignatureInput(#[from] ParseError),

    /// Key identifier doesn't describe a supported public key
    #[error(transparent)]
    #[diagnostic(transparent)]
    KeyParse(#[from] crypto::parse::Error),

    /// Signature header is missing
    #[error("Missing signature header")]
    MissingSignatureHeader,

    /// Signature input header is missing
    #[error("Missing signature input header")]
    MissingSignatureInputHeader,

    /// Timestamp couldn't be formatted
    #[error(transparent)]
    TimeFormat(#[from] time::error::Format),

    /// Timestamp is out of range
    #[error(transparent)]
    TimeRange(#[from] time::error::ComponentRange),

    /// Signature didn't verify
    #[error(transparent)]
    #[diagnostic(transparent)]
    Verify(#[from] crypto::VerifyError),
}

/// Format of the `Signature` header
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignatureFormat {
    /// `indexed="?0;signify="<token>`, understood by deployed verifiers
    #[default]
    Legacy,

    /// `indexed="?0";signify=:<token>:`, a well-formed structured field dictionary
    Structured,
}

impl SignatureFormat {
    /// Render the header value carrying the signature token
    #[must_use]
    pub fn render(self, label: &str, token: &str) -> String {
        match self {
            Self::Legacy => format!("indexed=\"?0;{label}=\"{token}"),
            Self::Structured => format!("indexed=\"?0\";{label}=:{token}:"),
        }
    }
}

/// Parsed or to-be-rendered `Signature-Input` value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureInput<'a> {
    /// Label of the signature
    pub label: &'a str,

    /// Covered components, in signing order
    pub components: Vec<&'a str>,

    /// Creation time (UNIX seconds)
    pub created: i64,

    /// CESR-encoded public key of the signer
    pub key_id: &'a str,

    /// Value of the `alg` parameter, if present
    pub algorithm: Option<&'a str>,
}

impl fmt::Display for SignatureInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=(", self.label)?;
        for (idx, component) in self.components.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{component}\"")?;
        }
        write!(f, ");created={};keyid=\"{}\"", self.created, self.key_id)?;

        if let Some(algorithm) = self.algorithm {
            write!(f, ";alg=\"{algorithm}\"")?;
        }

        Ok(())
    }
}
