use crate::{
    args::{RequestArgs, SignArgs, VerifyArgs},
    config::Configuration,
    util::{self, error_kaomoji},
};
use http::Request;
use http_signatures::{
    content_digest::{self, Padding, CONTENT_DIGEST},
    crypto::parse,
    ring::signature::Ed25519KeyPair,
    signify::{self, easy, SigningConfiguration},
};
use miette::{bail, IntoDiagnostic, Result};
use std::{fs, io::Write};
use tracing::debug;

fn build_request(args: &RequestArgs) -> Result<Request<Vec<u8>>> {
    let body = match args.body {
        Some(ref path) => fs::read(path).into_diagnostic()?,
        None => Vec::new(),
    };

    let mut builder = Request::builder()
        .method(args.method.as_str())
        .uri(args.uri.as_str());

    for header in &args.headers {
        let Some((name, value)) = util::split_header(header) else {
            bail!(
                "Invalid header {header:?}, expected `name: value` {}",
                error_kaomoji()
            );
        };
        builder = builder.header(name, value);
    }

    builder.body(body).into_diagnostic()
}

fn sign_request<W>(sink: &mut W, key: &Ed25519KeyPair, args: &SignArgs) -> Result<()>
where
    W: Write,
{
    let key_id = parse::key_id(key)?;

    let mut config = SigningConfiguration {
        signature_format: args.format.into(),
        include_algorithm: args.include_algorithm,
        ..SigningConfiguration::default()
    };
    if !args.components.is_empty() {
        config.components.clone_from(&args.components);
    }

    let request = build_request(&args.request)?;
    let request = easy::prepare_request(request, &key_id, key, &config)?;

    for (name, value) in request.headers() {
        writeln!(sink, "{name}: {}", value.to_str().into_diagnostic()?).into_diagnostic()?;
    }

    Ok(())
}

pub fn sign<W>(sink: &mut W, config: &Configuration, args: &SignArgs) -> Result<()>
where
    W: Write,
{
    debug!(path = %config.private_key_path.display(), "reading private key");
    let pem = fs::read_to_string(&config.private_key_path).into_diagnostic()?;
    let key = parse::private_key(&pem)?;

    sign_request(sink, &key, args)
}

pub fn verify<W>(sink: &mut W, args: &VerifyArgs) -> Result<()>
where
    W: Write,
{
    let request = build_request(&args.request)?;

    if request.headers().contains_key(&CONTENT_DIGEST) {
        let padding = if args.unpadded {
            Padding::Unpadded
        } else {
            Padding::Padded
        };
        content_digest::verify(request.headers(), request.body(), padding)?;
    } else {
        debug!("no content digest present, skipping body check");
    }

    let key_id = signify::verify(&request)?;

    util::success(sink, format_args!("Signature by {key_id} is valid!")).into_diagnostic()
}
