use crate::{args::KeygenArgs, util};
use http_signatures::crypto::parse;
use miette::{IntoDiagnostic, Result};
use std::{
    fs::{self, File},
    io::Write,
    path::Path,
};

fn write_private_key(path: &Path, pem: &str) -> std::io::Result<()> {
    let mut options = File::options();
    options.create(true).truncate(true).write(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    options.open(path)?.write_all(pem.as_bytes())
}

pub fn keygen<W>(sink: &mut W, args: &KeygenArgs) -> Result<()>
where
    W: Write,
{
    let (key, pem) = parse::generate()?;
    let key_id = parse::key_id(&key)?;

    write_private_key(&args.private_key, &pem).into_diagnostic()?;
    fs::write(&args.public_key, &key_id).into_diagnostic()?;

    writeln!(sink, "Key identifier: {key_id}").into_diagnostic()?;
    writeln!(sink, "Public key saved to {}", args.public_key.display()).into_diagnostic()?;
    util::success(
        sink,
        format_args!("Private key saved to {}", args.private_key.display()),
    )
    .into_diagnostic()
}

#[cfg(test)]
mod test {
    use super::keygen;
    use crate::args::KeygenArgs;
    use http_signatures::crypto::parse;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn generate_files() {
        let temp_dir = TempDir::new().unwrap();

        let args = KeygenArgs {
            private_key: temp_dir.path().join("privkey.pem"),
            public_key: temp_dir.path().join("pubkey.txt"),
        };
        keygen(&mut Vec::new(), &args).unwrap();

        let key = parse::private_key(&fs::read_to_string(&args.private_key).unwrap()).unwrap();
        let key_id = fs::read_to_string(&args.public_key).unwrap();
        assert_eq!(parse::key_id(&key).unwrap(), key_id);
        assert!(parse::public_key(&key_id).is_ok());
    }
}
