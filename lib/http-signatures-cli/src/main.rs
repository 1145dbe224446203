use self::{
    args::{ToolArgs, ToolSubcommand},
    config::Configuration,
};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io;

mod args;
mod codec;
mod config;
mod digest;
mod keygen;
mod parse_header;
mod request;
mod util;

fn main() -> Result<()> {
    miette::set_panic_hook();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ToolArgs::parse();
    let mut stdout = io::stdout().lock();

    match args.subcommand {
        ToolSubcommand::Encode(args) => codec::encode(&mut stdout, &args),
        ToolSubcommand::Decode(args) => codec::decode(&mut stdout, &args),
        ToolSubcommand::Digest(args) => digest::digest(&mut stdout, &args),
        ToolSubcommand::VerifyDigest(args) => digest::verify_digest(&mut stdout, &args),
        ToolSubcommand::Keygen(args) => keygen::keygen(&mut stdout, &args),
        ToolSubcommand::Sign(args) => {
            let config: Configuration = envy::from_env().into_diagnostic()?;
            request::sign(&mut stdout, &config, &args)
        }
        ToolSubcommand::Verify(args) => request::verify(&mut stdout, &args),
        ToolSubcommand::ParseHeader(args) => parse_header::parse_header(&mut stdout, args),
    }
}
