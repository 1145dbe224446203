use miette::Diagnostic;
use ring::signature::{Ed25519KeyPair, Signature};
use thiserror::Error;

/// Signing backend failure
#[derive(Debug, Diagnostic, Error)]
#[error("Failed to sign message")]
pub struct SignError;

/// Signing key definition
pub trait SigningKey {
    /// Type the signature algorithm outputs
    type Output: AsRef<[u8]>;

    /// Sign a message
    fn sign(&self, msg: &[u8]) -> Result<Self::Output, SignError>;
}

impl SigningKey for Ed25519KeyPair {
    type Output = Signature;

    #[inline]
    fn sign(&self, msg: &[u8]) -> Result<Self::Output, SignError> {
        Ok(self.sign(msg))
    }
}

impl<K> SigningKey for &K
where
    K: SigningKey + ?Sized,
{
    type Output = K::Output;

    #[inline]
    fn sign(&self, msg: &[u8]) -> Result<Self::Output, SignError> {
        (**self).sign(msg)
    }
}

/// Sign a message with the provided signing key and frame the signature as a CESR primitive
#[inline]
pub fn sign<SK>(payload: &[u8], key: &SK) -> Result<String, super::Error>
where
    SK: SigningKey + ?Sized,
{
    let signature = key.sign(payload)?;
    let primitive = cesr::encode(signature.as_ref(), cesr::code::ED25519_SIGNATURE)?;

    Ok(primitive)
}
