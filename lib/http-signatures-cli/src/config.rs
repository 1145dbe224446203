use serde::Deserialize;
use std::path::PathBuf;

fn default_private_key_path() -> PathBuf {
    PathBuf::from("privkey.pem")
}

#[derive(Deserialize)]
pub struct Configuration {
    #[serde(default = "default_private_key_path")]
    pub private_key_path: PathBuf,
}
