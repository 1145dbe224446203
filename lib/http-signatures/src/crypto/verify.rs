use miette::Diagnostic;
use ring::signature::UnparsedPublicKey;
use thiserror::Error;

/// Verification error
#[derive(Debug, Diagnostic, Error)]
pub enum VerifyError {
    /// Signature isn't framed as an Ed25519 signature
    #[error("Unexpected signature code {0:?}")]
    UnexpectedCode(String),

    /// Primitive failed to decode
    #[error(transparent)]
    Primitive(#[from] cesr::Error),

    /// Verification failed
    #[error("Verification failed")]
    Verification,
}

/// Verify that the message corresponds with the raw signature using the provided verifying key
#[inline]
pub fn verify<B>(
    msg: &[u8],
    signature: &[u8],
    key: &UnparsedPublicKey<B>,
) -> Result<(), VerifyError>
where
    B: AsRef<[u8]>,
{
    key.verify(msg, signature)
        .map_err(|_| VerifyError::Verification)
}

/// Verify that the message corresponds with the CESR-framed signature
#[inline]
pub fn verify_primitive<B>(
    msg: &[u8],
    signature: &str,
    key: &UnparsedPublicKey<B>,
) -> Result<(), VerifyError>
where
    B: AsRef<[u8]>,
{
    let signature: cesr::Primitive = signature.parse()?;
    if signature.code() != cesr::code::ED25519_SIGNATURE {
        return Err(VerifyError::UnexpectedCode(signature.code().to_string()));
    }

    verify(msg, signature.payload(), key)
}
