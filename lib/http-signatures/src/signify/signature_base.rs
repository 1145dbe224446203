//!
//! Utilities for building signature bases
//!

use super::{component, SignatureInput};
use http::Request;
use std::fmt::Write;

/// Construct the signature base for the components
///
/// `signature_input` is appended verbatim, so verifiers pass the header exactly as received.
#[inline]
pub fn construct<B, S>(
    components: &[S],
    request: &Request<B>,
    signature_input: &str,
) -> Result<String, component::Error>
where
    S: AsRef<str>,
{
    let mut signature_base = String::new();
    for name in components {
        let name = name.as_ref();
        let value = component::resolve(name, request)?;
        let _ = writeln!(signature_base, "{name}: {value}");
    }
    signature_base.push_str(signature_input);

    Ok(signature_base)
}

/// Construct the signature base described by the signature input
#[inline]
pub fn signature_base<B>(
    signature_input: &SignatureInput<'_>,
    request: &Request<B>,
) -> Result<String, component::Error> {
    construct(
        &signature_input.components,
        request,
        &signature_input.to_string(),
    )
}
