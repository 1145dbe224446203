use http::header::InvalidHeaderValue;
use miette::Diagnostic;
use thiserror::Error;

/// Digest header error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// The message already carries a digest header
    #[error("Content digest is already set")]
    AlreadySet,

    /// Computed header value isn't a valid header value
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),

    /// Header isn't of the form `<algorithm>=<digest>`
    #[error("Malformed content digest")]
    MalformedHeader,

    /// Digest in the header doesn't match the body
    #[error("Content digest doesn't match the body")]
    Mismatch,

    /// No digest header present
    #[error("Missing content digest")]
    MissingHeader,

    /// Algorithm is unknown or not supported
    #[error("Unsupported digest algorithm {0:?}")]
    #[diagnostic(help("supported algorithms are sha-256 and sha-512"))]
    UnsupportedAlgorithm(String),
}
