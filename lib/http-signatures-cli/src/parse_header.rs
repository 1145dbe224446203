use crate::{args::ParseHeaderArgs, util};
use http_signatures::signify;
use miette::{IntoDiagnostic, Result};
use std::io::Write;

pub fn parse_header<W>(sink: &mut W, args: ParseHeaderArgs) -> Result<()>
where
    W: Write,
{
    let header = args.header;
    let signature_input = match signify::parse(&header) {
        Ok(signature_input) => signature_input,
        Err(err) => return Err(miette::Error::new(err).with_source_code(header.clone())),
    };

    writeln!(sink, "label:      {}", signature_input.label).into_diagnostic()?;
    writeln!(sink, "components: {:?}", signature_input.components).into_diagnostic()?;
    writeln!(sink, "created:    {}", signature_input.created).into_diagnostic()?;
    writeln!(sink, "keyid:      {}", signature_input.key_id).into_diagnostic()?;
    if let Some(algorithm) = signature_input.algorithm {
        writeln!(sink, "alg:        {algorithm}").into_diagnostic()?;
    }

    util::success(sink, "Header is valid!").into_diagnostic()
}
