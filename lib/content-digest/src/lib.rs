//!
//! `Content-Digest` header handling
//!
//! The header value has the form `<algorithm>=:<digest>:` where the digest is URL-safe Base64
//! wrapped in colons (a structured field byte sequence). Requests and responses share this exact format.
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]

use http::{HeaderMap, HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha512};
use std::str::FromStr;
use strum::{AsRefStr, EnumString};
use subtle::ConstantTimeEq;
use tracing::debug;

pub use self::error::Error;

mod error;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Name of the digest header
pub static CONTENT_DIGEST: HeaderName = HeaderName::from_static("content-digest");

/// Supported digest algorithms
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Deserialize, EnumString, PartialEq, Eq, Serialize,
)]
#[non_exhaustive]
#[strum(ascii_case_insensitive)]
pub enum Algorithm {
    /// SHA-256
    #[default]
    #[serde(rename = "sha-256", alias = "SHA-256")]
    #[strum(to_string = "sha-256", serialize = "id-sha-256")]
    Sha256,

    /// SHA-512
    #[serde(rename = "sha-512", alias = "SHA-512")]
    #[strum(to_string = "sha-512", serialize = "id-sha-512")]
    Sha512,
}

impl Algorithm {
    /// Hash the data
    #[must_use]
    pub fn digest(&self, data: impl AsRef<[u8]>) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(data).to_vec(),
            Self::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Parse the algorithm name, ignoring case
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_str(name).map_err(|_| Error::UnsupportedAlgorithm(name.to_string()))
    }
}

/// Base64 padding mode of the encoded digest
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Padding {
    /// Pad with `=` up to a multiple of four characters
    #[default]
    Padded,

    /// Leave the padding off
    Unpadded,
}

impl Padding {
    fn encode(self, data: &[u8]) -> String {
        match self {
            Self::Padded => base64_simd::URL_SAFE.encode_to_string(data),
            Self::Unpadded => base64_simd::URL_SAFE_NO_PAD.encode_to_string(data),
        }
    }
}

/// Hash the body and wrap the encoded hash into colons
fn wrapped_digest(algorithm: Algorithm, body: &[u8], padding: Padding) -> String {
    format!(":{}:", padding.encode(&algorithm.digest(body)))
}

/// Compute the header value for the body
#[must_use]
pub fn encode_value(algorithm: Algorithm, body: &[u8], padding: Padding) -> String {
    format!(
        "{}={}",
        algorithm.as_ref(),
        wrapped_digest(algorithm, body, padding)
    )
}

/// Compute the digest of the body and add it to the headers
///
/// Fails if the headers already carry a digest. Nothing is changed in that case.
pub fn attach(
    headers: &mut HeaderMap,
    algorithm: Algorithm,
    body: &[u8],
    padding: Padding,
) -> Result<()> {
    if headers.contains_key(&CONTENT_DIGEST) {
        return Err(Error::AlreadySet);
    }

    let value = HeaderValue::from_str(&encode_value(algorithm, body, padding))?;
    headers.insert(CONTENT_DIGEST.clone(), value);

    Ok(())
}

/// Same as [`attach`] but with the algorithm given by its name
pub fn attach_str(
    headers: &mut HeaderMap,
    algorithm: &str,
    body: &[u8],
    padding: Padding,
) -> Result<()> {
    if headers.contains_key(&CONTENT_DIGEST) {
        return Err(Error::AlreadySet);
    }

    attach(headers, Algorithm::parse(algorithm)?, body, padding)
}

/// Verify that the digest header matches the body
///
/// The digest is recomputed with the algorithm named in the header and compared in its encoded form,
/// so the padding mode has to match the one used by the sender.
pub fn verify(headers: &HeaderMap, body: &[u8], padding: Padding) -> Result<()> {
    let header = headers
        .get(&CONTENT_DIGEST)
        .filter(|value| !value.is_empty())
        .ok_or(Error::MissingHeader)?;

    let header = header.to_str().map_err(|_| Error::MalformedHeader)?;
    let (algorithm_name, received) = header.split_once('=').ok_or(Error::MalformedHeader)?;
    let algorithm = Algorithm::parse(algorithm_name)?;

    let expected = wrapped_digest(algorithm, body, padding);
    if bool::from(expected.as_bytes().ct_eq(received.as_bytes())) {
        Ok(())
    } else {
        debug!(algorithm = algorithm.as_ref(), "content digest mismatch");
        Err(Error::Mismatch)
    }
}
