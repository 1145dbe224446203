use crate::args::{DecodeArgs, EncodeArgs};
use http_signatures::cesr::{self, Primitive};
use miette::{IntoDiagnostic, Result};
use std::io::Write;

pub fn encode<W>(sink: &mut W, args: &EncodeArgs) -> Result<()>
where
    W: Write,
{
    let payload = hex::decode(args.payload.trim()).into_diagnostic()?;
    let primitive = if args.raw {
        cesr::encode_raw(&payload, &args.prefix)
    } else {
        cesr::encode(&payload, &args.prefix)?
    };

    writeln!(sink, "{primitive}").into_diagnostic()
}

pub fn decode<W>(sink: &mut W, args: &DecodeArgs) -> Result<()>
where
    W: Write,
{
    let primitive: Primitive = args.primitive.trim().parse()?;

    writeln!(sink, "code:    {}", primitive.code()).into_diagnostic()?;
    writeln!(sink, "payload: {}", hex::encode(primitive.payload())).into_diagnostic()
}

#[cfg(test)]
mod test {
    use super::{decode, encode};
    use crate::args::{DecodeArgs, EncodeArgs};
    use pretty_assertions::assert_eq;

    const PUBLIC_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const KEY_ID: &str = "BNdamAGCsQq31Uv-08lkBzoO4XLz2qYjJa8CGmj3B1Ea";

    #[test]
    fn encode_key() {
        let mut sink = Vec::new();
        let args = EncodeArgs {
            prefix: "B".into(),
            payload: PUBLIC_KEY.into(),
            raw: false,
        };
        encode(&mut sink, &args).unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), format!("{KEY_ID}\n"));
    }

    #[test]
    fn encode_raw() {
        let mut sink = Vec::new();
        let args = EncodeArgs {
            prefix: String::new(),
            payload: "01020304".into(),
            raw: true,
        };
        encode(&mut sink, &args).unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "AAABAgME\n");
    }

    #[test]
    fn encode_incompatible() {
        let args = EncodeArgs {
            prefix: "0B".into(),
            payload: PUBLIC_KEY.into(),
            raw: false,
        };

        assert!(encode(&mut Vec::new(), &args).is_err());
    }

    #[test]
    fn decode_key() {
        let mut sink = Vec::new();
        let args = DecodeArgs {
            primitive: KEY_ID.into(),
        };
        decode(&mut sink, &args).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            format!("code:    B\npayload: {PUBLIC_KEY}\n")
        );
    }
}
