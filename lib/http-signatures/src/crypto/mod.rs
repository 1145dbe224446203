//!
//! Common cryptographic operations
//!

use miette::Diagnostic;
use thiserror::Error;

mod sign;
mod verify;

pub mod parse;

pub use self::sign::{sign, SignError, SigningKey};
pub use self::verify::{verify, verify_primitive, VerifyError};

/// Signature production error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Signature couldn't be framed
    #[error(transparent)]
    Primitive(#[from] cesr::Error),

    /// Signing backend failed
    #[error(transparent)]
    Sign(#[from] SignError),
}
