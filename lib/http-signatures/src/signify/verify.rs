use super::{parse, signature_base, signature_token, Error};
use crate::{crypto, SIGNATURE_HEADER, SIGNATURE_INPUT_HEADER};
use http::Request;
use tracing::{debug, instrument};

/// Verify the signature of the request
///
/// The public key is recovered from the `keyid` parameter. The signature base is rebuilt from the
/// current state of the request and the `Signature-Input` header exactly as received.
///
/// Returns the key identifier of the signer
#[instrument(skip_all)]
pub fn verify<B>(request: &Request<B>) -> Result<&str, Error> {
    let Some(signature_input_header) = request.headers().get(&SIGNATURE_INPUT_HEADER) else {
        debug!("Missing 'Signature-Input' header");
        return Err(Error::MissingSignatureInputHeader);
    };
    let Some(signature_header) = request.headers().get(&SIGNATURE_HEADER) else {
        debug!("Missing 'Signature' header");
        return Err(Error::MissingSignatureHeader);
    };

    let signature_input_header = signature_input_header.to_str()?;
    let signature_input = parse(signature_input_header)?;

    let Some(signature) = signature_token(signature_header.to_str()?, signature_input.label) else {
        debug!(label = signature_input.label, "No signature for label");
        return Err(Error::InvalidSignatureHeader);
    };

    let public_key = crypto::parse::public_key(signature_input.key_id)?;
    let signature_base = signature_base::construct(
        &signature_input.components,
        request,
        signature_input_header,
    )?;

    if let Err(err) = crypto::verify_primitive(signature_base.as_bytes(), signature, &public_key) {
        debug!(key_id = signature_input.key_id, error = %err, "Signature verification failed");
        return Err(err.into());
    }

    Ok(signature_input.key_id)
}
