use std::fmt;
use std::net::Ipv4Addr;

use clap::{Parser, ValueEnum};
use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Parser)]
#[command(version, about = "Create or delete DNS A records through a hosted provider")]
pub struct Cli {
    /// DNS provider that manages the records.
    #[arg(long, value_enum, default_value_t = Provider::Cloudflare)]
    pub provider: Provider,

    /// IPv4 address to create an A record for, can be given multiple times.
    #[arg(long = "create", value_name = "IP")]
    pub create: Vec<Ipv4Addr>,

    /// IPv4 address whose A record should be deleted, can be given multiple times.
    #[arg(long = "delete", value_name = "IP")]
    pub delete: Vec<Ipv4Addr>,

    /// Record name, relative to the provider's zone.
    #[arg(long, value_name = "NAME")]
    pub domain: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Aws,
    Cloudflare,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Aws => "aws",
            Provider::Cloudflare => "cloudflare",
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CloudflareSettings {
    #[serde(rename = "zoneid")]
    pub zone_id: String,
    pub token: String,
}

impl CloudflareSettings {
    /// Reads CF_ZONEID and CF_TOKEN.
    pub fn from_env() -> Result<Self, ConfigError> {
        let cfg = Config::builder()
            .add_source(config::Environment::with_prefix("CF"))
            .build()?;

        cfg.try_deserialize()
    }
}
