use crate::{
    args::{DigestArgs, VerifyDigestArgs},
    util,
};
use http::{HeaderMap, HeaderValue};
use http_signatures::content_digest::{self, Algorithm, Padding, CONTENT_DIGEST};
use miette::{IntoDiagnostic, Result};
use std::{fs, io::Write};

fn padding(unpadded: bool) -> Padding {
    if unpadded {
        Padding::Unpadded
    } else {
        Padding::Padded
    }
}

fn write_digest<W>(sink: &mut W, body: &[u8], algorithm: &str, padding: Padding) -> Result<()>
where
    W: Write,
{
    let algorithm = Algorithm::parse(algorithm)?;
    let value = content_digest::encode_value(algorithm, body, padding);

    writeln!(sink, "{CONTENT_DIGEST}: {value}").into_diagnostic()
}

fn check_digest<W>(sink: &mut W, body: &[u8], header: &str, padding: Padding) -> Result<()>
where
    W: Write,
{
    let mut headers = HeaderMap::new();
    headers.insert(
        &CONTENT_DIGEST,
        HeaderValue::from_str(header.trim()).into_diagnostic()?,
    );
    content_digest::verify(&headers, body, padding)?;

    util::success(sink, "Digest matches the body!").into_diagnostic()
}

pub fn digest<W>(sink: &mut W, args: &DigestArgs) -> Result<()>
where
    W: Write,
{
    let body = fs::read(&args.file).into_diagnostic()?;
    write_digest(sink, &body, &args.algorithm, padding(args.unpadded))
}

pub fn verify_digest<W>(sink: &mut W, args: &VerifyDigestArgs) -> Result<()>
where
    W: Write,
{
    let body = fs::read(&args.file).into_diagnostic()?;
    check_digest(sink, &body, &args.header, padding(args.unpadded))
}
