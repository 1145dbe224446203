//!
//! HTTP message signatures with self-framing (CESR) keys and signatures
//!
//! Only supports Ed25519. Keys identify themselves by their CESR-encoded public key,
//! signatures travel as CESR primitives as well.
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]

use http::HeaderName;

pub mod crypto;
pub mod signify;

pub use cesr;
pub use content_digest;
pub use ring;

/// `signature` header
pub static SIGNATURE_HEADER: HeaderName = HeaderName::from_static("signature");

/// `signature-input` header
pub static SIGNATURE_INPUT_HEADER: HeaderName = HeaderName::from_static("signature-input");

/// `origin-date` header, set right before signing
pub static ORIGIN_DATE_HEADER: HeaderName = HeaderName::from_static("origin-date");

/// `signify-resource` header, carries the identifier of the signing party
pub static SIGNIFY_RESOURCE_HEADER: HeaderName = HeaderName::from_static("signify-resource");
