use super::{
    signature_base, Error, SignatureFormat, SignatureInput, SigningConfiguration, ALGORITHM,
    DEFAULT_COMPONENTS, LABEL,
};
use crate::{
    crypto::{self, SigningKey},
    ORIGIN_DATE_HEADER, SIGNATURE_HEADER, SIGNATURE_INPUT_HEADER,
};
use derive_builder::Builder;
use http::{HeaderValue, Request};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};
use tracing::{debug, instrument};

fn default_components() -> Vec<String> {
    DEFAULT_COMPONENTS.iter().map(ToString::to_string).collect()
}

/// Request signer
///
/// Sets `origin-date` on every request it signs, so keep `origin-date` among the components.
#[derive(Builder, Clone)]
#[builder(pattern = "owned")]
pub struct Signer<K> {
    /// Components covered by the signature, in order
    #[builder(default = "default_components()", setter(custom))]
    components: Vec<String>,

    /// CESR-encoded public key of the signer
    #[builder(setter(into))]
    key_id: String,

    /// Signing key
    key: K,

    /// Format of the `Signature` header
    #[builder(default)]
    format: SignatureFormat,

    /// Append `alg="ed25519"` to the signature input
    #[builder(default)]
    include_algorithm: bool,
}

impl<K> SignerBuilder<K> {
    /// Components covered by the signature, in order
    #[must_use]
    pub fn components<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.components = Some(components.into_iter().map(Into::into).collect());
        self
    }
}

impl<K> Signer<K>
where
    K: SigningKey,
{
    /// Start building a signer
    #[must_use]
    pub fn builder() -> SignerBuilder<K> {
        SignerBuilder::default()
    }

    /// Construct a signer from the configuration
    pub fn from_configuration(
        config: &SigningConfiguration,
        key_id: impl Into<String>,
        key: K,
    ) -> Self {
        Self {
            components: config.components.clone(),
            key_id: key_id.into(),
            key,
            format: config.signature_format,
            include_algorithm: config.include_algorithm,
        }
    }

    /// Identifier of the signing key
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Sign the request as of now
    #[inline]
    pub fn sign<B>(&self, request: &mut Request<B>) -> Result<(), Error> {
        self.sign_at(request, OffsetDateTime::now_utc())
    }

    /// Sign the request as of the provided point in time
    ///
    /// Sets the `origin-date`, `signature-input` and `signature` headers, overwriting previous values.
    /// Headers set before a failure stay set.
    #[instrument(skip_all, fields(key_id = %self.key_id))]
    pub fn sign_at<B>(&self, request: &mut Request<B>, now: OffsetDateTime) -> Result<(), Error> {
        // Whole seconds in UTC, `created` and `origin-date` have to agree
        let created = now.unix_timestamp();
        let origin_date = OffsetDateTime::from_unix_timestamp(created)?.format(&Rfc3339)?;
        request
            .headers_mut()
            .insert(&ORIGIN_DATE_HEADER, HeaderValue::from_str(&origin_date)?);

        let signature_input = SignatureInput {
            label: LABEL,
            components: self.components.iter().map(String::as_str).collect(),
            created,
            key_id: &self.key_id,
            algorithm: self.include_algorithm.then_some(ALGORITHM),
        }
        .to_string();

        let signature_base =
            signature_base::construct(&self.components, request, &signature_input)?;
        let signature = crypto::sign(signature_base.as_bytes(), &self.key)?;
        debug!(%signature_input, "signed request");

        let headers = request.headers_mut();
        headers.insert(
            &SIGNATURE_INPUT_HEADER,
            HeaderValue::from_str(&signature_input)?,
        );
        headers.insert(
            &SIGNATURE_HEADER,
            HeaderValue::from_str(&self.format.render(LABEL, &signature))?,
        );

        Ok(())
    }
}
