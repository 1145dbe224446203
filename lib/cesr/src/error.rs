use miette::Diagnostic;
use thiserror::Error;

/// Primitive codec error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Base64 payload failed to decode
    #[error(transparent)]
    Decode(#[from] base64_simd::Error),

    /// Code doesn't belong to any class or its class expects a different payload length
    #[error("Code {code:?} can't frame a payload of {payload_len} bytes")]
    #[diagnostic(help("one character codes frame 32 bytes, two character codes frame 64 bytes"))]
    IncompatiblePrefix {
        /// Offending code
        code: String,

        /// Length of the payload that was supposed to be framed
        payload_len: usize,
    },

    /// Length of the text isn't valid for the primitive
    #[error("Invalid primitive length ({0} characters)")]
    InvalidLength(usize),

    /// Leading characters don't form a known code
    #[error("Unsupported primitive prefix")]
    UnsupportedPrefix,
}
