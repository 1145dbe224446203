//!
//! Self-framing text primitives
//!
//! A primitive is a fixed length payload, left-padded with zero bytes to a 3 byte boundary,
//! rendered as URL-safe Base64 whose leading characters are overwritten with a type code.
//! The code lands exactly on the bits occupied by the zero padding, so nothing of the payload is lost.
//!

#![forbid(rust_2018_idioms, unsafe_code)]
#![deny(missing_docs)]

use std::iter;

pub use self::{
    class::PrimitiveClass,
    error::Error,
    primitive::{code, Primitive},
};

mod class;
mod error;
mod primitive;

type Result<T, E = Error> = std::result::Result<T, E>;

/// Zero in the Base64 alphabet
const ZERO_DIGIT: char = 'A';

/// Encode the payload and overlay the prefix without validating anything
///
/// The prefix replaces the first `prefix.len()` characters of the encoding.
/// If the prefix doesn't line up with the zero padding, the result won't decode back into the payload.
/// Prefer [`encode`] unless you really want this.
#[must_use]
pub fn encode_raw(payload: &[u8], prefix: &str) -> String {
    let pad_len = class::pad_len(payload.len());

    let mut padded = vec![0; pad_len + payload.len()];
    padded[pad_len..].copy_from_slice(payload);

    let encoded = base64_simd::URL_SAFE_NO_PAD.encode_to_string(&padded);

    let mut primitive = String::with_capacity(encoded.len());
    primitive.push_str(prefix);
    primitive.push_str(encoded.get(prefix.len()..).unwrap_or_default());
    primitive
}

/// Encode the payload into a primitive with the provided code
///
/// An empty code produces the bare zero-padded encoding.
/// Any other code has to belong to a [`PrimitiveClass`] whose payload length matches the payload.
pub fn encode(payload: &[u8], code: &str) -> Result<String> {
    if !code.is_empty() {
        let fits = PrimitiveClass::of_code(code)
            .is_some_and(|class| class.payload_len() == payload.len());

        if !fits {
            return Err(Error::IncompatiblePrefix {
                code: code.to_string(),
                payload_len: payload.len(),
            });
        }
    }

    Ok(encode_raw(payload, code))
}

/// Decode a primitive back into its raw payload
pub fn decode(text: &str) -> Result<Vec<u8>> {
    decode_with_class(text).map(|(_class, payload)| payload)
}

pub(crate) fn decode_with_class(text: &str) -> Result<(PrimitiveClass, Vec<u8>)> {
    if text.len() % 4 != 0 {
        return Err(Error::InvalidLength(text.len()));
    }

    let class = PrimitiveClass::of_text(text).ok_or(Error::UnsupportedPrefix)?;
    if text.len() != class.text_len() {
        return Err(Error::InvalidLength(text.len()));
    }

    // The code is pure ASCII at this point, slicing right after it is fine
    let digits = &text[class.code_len()..];

    let mut standard = String::with_capacity(text.len());
    standard.extend(iter::repeat(ZERO_DIGIT).take(class.code_len()));
    standard.extend(digits.chars().map(|digit| match digit {
        '-' => '+',
        '_' => '/',
        other => other,
    }));
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    let mut payload = base64_simd::STANDARD.decode_to_vec(standard)?;
    payload.drain(..class.pad_len());

    Ok((class, payload))
}
