use std::net::Ipv4Addr;

use cloudflare::endpoints::dns::{
    CreateDnsRecord, CreateDnsRecordParams, DeleteDnsRecord, DnsContent, DnsRecord,
    ListDnsRecords, ListDnsRecordsParams,
};
use cloudflare::endpoints::zone::ZoneDetails;
use cloudflare::framework::async_api::{ApiClient, Client};
use cloudflare::framework::auth::Credentials;
use cloudflare::framework::{Environment, HttpApiClientConfig};
use tracing::{error, info};

use super::ProviderError;

const DEFAULT_PROXIED: bool = false;

pub struct CloudflareProvider {
    zone_id: String,
    client: Client,
}

impl CloudflareProvider {
    pub fn new(token: String, zone_id: String) -> Result<Self, ProviderError> {
        let client = Client::new(
            Credentials::UserAuthToken { token },
            HttpApiClientConfig::default(),
            Environment::Production,
        )
        .map_err(|e| match e.downcast::<reqwest::Error>() {
            Ok(e) => ProviderError::Client(e),
            Err(e) => panic!("Unexpected error: {}", e),
        })?;

        Ok(Self { zone_id, client })
    }

    /// Canonical name of the configured zone, used to qualify relative
    /// record names.
    async fn zone_name(&self) -> Result<String, ProviderError> {
        let request = ZoneDetails {
            identifier: &self.zone_id,
        };
        Ok(self.client.request(&request).await?.result.name)
    }

    async fn list_records(
        &self,
        name: &str,
        addr: Ipv4Addr,
    ) -> Result<Vec<DnsRecord>, ProviderError> {
        let request = ListDnsRecords {
            zone_identifier: &self.zone_id,
            params: ListDnsRecordsParams {
                // The content filter carries both the fixed record type and
                // the exact address to match.
                record_type: Some(DnsContent::A { content: addr }),
                name: Some(name.to_owned()),
                page: None,
                per_page: Some(5000),
                order: None,
                direction: None,
                search_match: None,
            },
        };
        Ok(self.client.request(&request).await?.result)
    }
}

#[async_trait::async_trait]
impl super::DnsProvider for CloudflareProvider {
    #[tracing::instrument(skip(self))]
    async fn create_record(&self, name: &str, addr: Ipv4Addr) -> Result<(), ProviderError> {
        let request = CreateDnsRecord {
            zone_identifier: &self.zone_id,
            params: CreateDnsRecordParams {
                ttl: None,
                priority: None,
                proxied: Some(DEFAULT_PROXIED),
                name,
                content: DnsContent::A { content: addr },
            },
        };
        self.client.request(&request).await.map_err(|e| {
            error!(name, %addr, "can't create record: {}", e);
            e
        })?;

        info!(name, %addr, "record created");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_record(&self, name: &str, addr: Ipv4Addr) -> Result<(), ProviderError> {
        let zone = self.zone_name().await?;
        let fqdn = format!("{}.{}", name, zone);

        let records = self.list_records(&fqdn, addr).await.map_err(|e| {
            error!(name = %fqdn, %addr, "can't list records: {}", e);
            e
        })?;

        // When several records carry the same name and address, the first
        // one in the API's returned order is deleted.
        let record = records
            .into_iter()
            .next()
            .ok_or(ProviderError::NotFound { name: fqdn, addr })?;

        let request = DeleteDnsRecord {
            zone_identifier: &self.zone_id,
            identifier: &record.id,
        };
        self.client.request(&request).await.map_err(|e| {
            error!(name = %record.name, %addr, id = %record.id, "can't delete record: {}", e);
            e
        })?;

        info!(name = %record.name, %addr, "record deleted");
        Ok(())
    }
}
