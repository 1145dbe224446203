use clap::{Args, Parser, Subcommand, ValueEnum};
use http_signatures::signify::SignatureFormat;
use std::path::PathBuf;

#[derive(Clone, Copy, Default, PartialEq, ValueEnum)]
pub enum Format {
    /// `indexed="?0;signify="<token>`
    #[default]
    Legacy,

    /// `indexed="?0";signify=:<token>:`
    Structured,
}

impl From<Format> for SignatureFormat {
    fn from(value: Format) -> Self {
        match value {
            Format::Legacy => Self::Legacy,
            Format::Structured => Self::Structured,
        }
    }
}

#[derive(Args)]
pub struct EncodeArgs {
    /// Code of the primitive (e.g. `B` for an Ed25519 public key)
    #[arg(long, short)]
    pub prefix: String,

    /// Hex-encoded payload
    pub payload: String,

    /// Skip the check whether the code can frame a payload of this length
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct DecodeArgs {
    /// The primitive to decode
    pub primitive: String,
}

#[derive(Args)]
pub struct DigestArgs {
    /// File containing the message body
    pub file: PathBuf,

    /// Digest algorithm
    #[arg(default_value = "sha-256", long, short)]
    pub algorithm: String,

    /// Leave the Base64 padding off
    #[arg(long)]
    pub unpadded: bool,
}

#[derive(Args)]
pub struct VerifyDigestArgs {
    /// File containing the message body
    pub file: PathBuf,

    /// Value of the `Content-Digest` header
    pub header: String,

    /// The sender left the Base64 padding off
    #[arg(long)]
    pub unpadded: bool,
}

#[derive(Args)]
pub struct KeygenArgs {
    /// Where to write the PKCS#8 encoded private key
    #[arg(default_value = "privkey.pem", long)]
    pub private_key: PathBuf,

    /// Where to write the key identifier
    #[arg(default_value = "pubkey.txt", long)]
    pub public_key: PathBuf,
}

#[derive(Args)]
pub struct RequestArgs {
    /// HTTP method of the request
    #[arg(default_value = "GET", long, short)]
    pub method: String,

    /// Request URI
    #[arg(long, short)]
    pub uri: String,

    /// Additional header in the form `name: value`
    #[arg(long = "header", short = 'H')]
    pub headers: Vec<String>,

    /// File containing the request body
    #[arg(long, short)]
    pub body: Option<PathBuf>,
}

#[derive(Args)]
pub struct SignArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Components to cover, in order
    #[arg(long = "component", short)]
    pub components: Vec<String>,

    /// Format of the signature header
    #[arg(default_value_t, long, short, value_enum)]
    pub format: Format,

    /// Append the `alg` parameter to the signature input
    #[arg(long)]
    pub include_algorithm: bool,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// The sender left the Base64 padding of the content digest off
    #[arg(long)]
    pub unpadded: bool,
}

#[derive(Args)]
pub struct ParseHeaderArgs {
    /// Value of the `Signature-Input` header
    pub header: String,
}

#[derive(Subcommand)]
pub enum ToolSubcommand {
    /// Frame a payload as a CESR primitive
    Encode(EncodeArgs),

    /// Decode a CESR primitive into its code and payload
    Decode(DecodeArgs),

    /// Compute the `Content-Digest` header of a body
    Digest(DigestArgs),

    /// Check a `Content-Digest` header against a body
    VerifyDigest(VerifyDigestArgs),

    /// Generate an Ed25519 key pair
    Keygen(KeygenArgs),

    /// Sign a request and print the headers to send along
    ///
    /// The private key is read from the file at `PRIVATE_KEY_PATH` (default: `privkey.pem`)
    Sign(SignArgs),

    /// Verify the signature of a request
    Verify(VerifyArgs),

    /// Parse the `Signature-Input` header and report any format errors
    ParseHeader(ParseHeaderArgs),
}

#[derive(Parser)]
#[command(about, version)]
pub struct ToolArgs {
    #[clap(subcommand)]
    pub subcommand: ToolSubcommand,
}
