//!
//! Parse and generate cryptographic keys for use in the HTTP signature implementation
//!

use cesr::{code, Primitive, PrimitiveClass};
use const_oid::db::rfc8410::ID_ED_25519;
use miette::Diagnostic;
use pkcs8::{der::pem, LineEnding, PrivateKeyInfo, SecretDocument};
use ring::{
    rand::SystemRandom,
    signature::{Ed25519KeyPair, KeyPair, UnparsedPublicKey, ED25519},
};
use thiserror::Error;

/// PEM label of the raw key format (64 bytes, seed followed by the public key)
const RAW_ED25519_LABEL: &str = "ED25519 PRIVATE KEY";

/// PEM label of PKCS#8 documents
const PKCS8_LABEL: &str = "PRIVATE KEY";

/// Key parsing error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Malformed DER structure
    #[error(transparent)]
    Der(#[from] pkcs8::der::Error),

    /// Key rejected
    #[error(transparent)]
    KeyRejected(#[from] ring::error::KeyRejected),

    /// Malformed key
    #[error("Malformed key")]
    MalformedKey,

    /// Malformed PKCS#8 document
    #[error(transparent)]
    Pkcs8(#[from] pkcs8::Error),

    /// Key identifier isn't a valid primitive
    #[error(transparent)]
    Primitive(#[from] cesr::Error),

    /// Key generation failed
    #[error("Failed to generate key")]
    Unspecified(#[from] ring::error::Unspecified),

    /// Unknown key type
    #[error("Unknown key type")]
    #[diagnostic(help("only Ed25519 keys are supported"))]
    UnknownKeyType,
}

/// Parse an Ed25519 private key from its PEM form
///
/// Supported encodings:
///
/// - PKCS#8 (`PRIVATE KEY`)
/// - Raw seed and public key (`ED25519 PRIVATE KEY`)
#[inline]
pub fn private_key(pem: &str) -> Result<Ed25519KeyPair, Error> {
    // Raw keys aren't DER, so only the PEM framing is decoded up front
    let (label, der) =
        pem::decode_vec(pem.trim().as_bytes()).map_err(pkcs8::der::Error::from)?;
    let der = der.as_slice();

    match label {
        PKCS8_LABEL => {
            let private_key_info = PrivateKeyInfo::try_from(der)?;
            if private_key_info.algorithm.oid != ID_ED_25519 {
                return Err(Error::UnknownKeyType);
            }

            Ok(Ed25519KeyPair::from_pkcs8_maybe_unchecked(der)?)
        }
        RAW_ED25519_LABEL => {
            if der.len() != 64 {
                return Err(Error::MalformedKey);
            }

            let (seed, public_key) = der.split_at(32);
            Ok(Ed25519KeyPair::from_seed_and_public_key(seed, public_key)?)
        }
        _ => Err(Error::UnknownKeyType),
    }
}

/// Recover the public key from a key identifier
///
/// The identifier is the CESR primitive of the Ed25519 public key (code `B` or `D`)
#[inline]
pub fn public_key(key_id: &str) -> Result<UnparsedPublicKey<Vec<u8>>, Error> {
    let primitive: Primitive = key_id.parse()?;

    let is_ed25519 = primitive.class() == PrimitiveClass::Small
        && [code::ED25519_NON_TRANSFERABLE, code::ED25519].contains(&primitive.code());
    if !is_ed25519 {
        return Err(Error::UnknownKeyType);
    }

    Ok(UnparsedPublicKey::new(&ED25519, primitive.into_payload()))
}

/// Key identifier of the key pair
///
/// This is the public key framed as a non-transferable Ed25519 primitive
#[inline]
pub fn key_id(key: &Ed25519KeyPair) -> Result<String, Error> {
    cesr::encode(key.public_key().as_ref(), code::ED25519_NON_TRANSFERABLE).map_err(Error::from)
}

/// Generate a new Ed25519 key pair
///
/// Returns the key pair and its PKCS#8 PEM encoding
#[inline]
pub fn generate() -> Result<(Ed25519KeyPair, String), Error> {
    let pkcs8 = Ed25519KeyPair::generate_pkcs8(&SystemRandom::new())?;
    let key_pair = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref())?;

    let document = SecretDocument::try_from(pkcs8.as_ref())?;
    let pem = document.to_pem(PKCS8_LABEL, LineEnding::LF)?;

    Ok((key_pair, pem.as_str().to_owned()))
}
