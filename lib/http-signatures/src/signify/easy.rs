//!
//! Easy and fool-proof request preparation
//!
//! Attaches the content digest, identifies the signer and signs, all in one go
//!

use super::{Signer, SigningConfiguration};
use crate::{crypto::SigningKey, SIGNIFY_RESOURCE_HEADER};
use http::{HeaderValue, Request};
use miette::Diagnostic;
use thiserror::Error;
use tracing::instrument;

/// Easy module error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Content digest couldn't be attached
    #[error(transparent)]
    #[diagnostic(transparent)]
    Digest(#[from] content_digest::Error),

    /// Key identifier isn't a valid header value
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),

    /// Signing failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Signing(#[from] super::Error),
}

/// Prepare a request for sending using the provided signing key
///
/// Attaches `content-digest`, sets `signify-resource` to the key identifier and signs the request
/// with the configured components
#[inline]
#[instrument(skip_all, fields(%key_id))]
pub fn prepare_request<B, K>(
    request: Request<B>,
    key_id: &str,
    key: K,
    config: &SigningConfiguration,
) -> Result<Request<B>, Error>
where
    B: AsRef<[u8]>,
    K: SigningKey,
{
    let (mut parts, body) = request.into_parts();
    content_digest::attach(
        &mut parts.headers,
        config.digest_algorithm,
        body.as_ref(),
        config.digest_padding,
    )?;
    parts
        .headers
        .insert(&SIGNIFY_RESOURCE_HEADER, HeaderValue::from_str(key_id)?);

    let mut request = Request::from_parts(parts, body);
    Signer::from_configuration(config, key_id, key).sign(&mut request)?;

    Ok(request)
}
