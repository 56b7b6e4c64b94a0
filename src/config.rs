use anyhow::Result;
use clap_serde_derive::ClapSerde;
use serde::Deserialize;

#[derive(ClapSerde, Deserialize, Debug)]
pub struct Config {
    /// The address the listener binds to
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub address: String,

    /// The port the listener binds to
    #[arg(short, long, env, default_value = "8880")]
    pub port: u16,

    /// Name of the ASR engine used when a request does not pick one
    #[arg(long, env, default_value = "remote")]
    pub asr_default: String,

    /// URL of the remote ASR service, leave empty to start with an empty pool
    #[arg(long, env, default_value = "")]
    pub asr_endpoint: String,

    /// Bearer token sent along with requests to the remote ASR service
    #[arg(long, env, default_value = "")]
    pub asr_api_key: String,

    /// Timeout for requests to the remote ASR service in seconds
    #[arg(long, env, default_value = "30")]
    pub asr_timeout_secs: u64,
}

impl Config {
    pub fn from_toml(path: &str) -> Result<Self> {
        let str = std::fs::read_to_string(path)?;
        let config = toml::from_str(&str)?;
        Ok(config)
    }
}
