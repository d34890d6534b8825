pub mod cloudflare;

use std::net::Ipv4Addr;

use ::cloudflare::framework::response::ApiFailure;
use thiserror::Error;

use crate::settings::{CloudflareSettings, Provider};

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DnsProvider: Send + Sync {
    async fn create_record(&self, name: &str, addr: Ipv4Addr) -> Result<(), ProviderError>;
    async fn delete_record(&self, name: &str, addr: Ipv4Addr) -> Result<(), ProviderError>;
}

/// Builds the client for the selected backend, resolving its credentials
/// from the environment.
pub fn new_provider(provider: Provider) -> Result<Box<dyn DnsProvider>, ProviderError> {
    match provider {
        Provider::Cloudflare => {
            let settings = CloudflareSettings::from_env()?;
            let client =
                self::cloudflare::CloudflareProvider::new(settings.token, settings.zone_id)?;
            Ok(Box::new(client))
        }
        Provider::Aws => Err(ProviderError::Unsupported(provider)),
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unsupported provider: {0}")]
    Unsupported(Provider),
    #[error("missing provider credentials: {0}")]
    Credentials(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiFailure),
    #[error("record {name} with address {addr} not found")]
    NotFound { name: String, addr: Ipv4Addr },
}
