use std::net::Ipv4Addr;

use tracing::error;

use crate::dns::DnsProvider;

/// Applies a batch of record changes through one provider: every create
/// first, then every delete, in the order the addresses were supplied.
pub struct Runner {
    provider: Box<dyn DnsProvider>,
    domain: String,
}

impl Runner {
    pub fn new(provider: Box<dyn DnsProvider>, domain: String) -> Self {
        Self { provider, domain }
    }

    /// A failed operation is logged and the batch moves on to the next
    /// address.
    pub async fn run(&self, creates: &[Ipv4Addr], deletes: &[Ipv4Addr]) {
        for &addr in creates {
            if let Err(e) = self.provider.create_record(&self.domain, addr).await {
                error!(domain = %self.domain, %addr, "failed to create record: {}", e);
            }
        }

        for &addr in deletes {
            if let Err(e) = self.provider.delete_record(&self.domain, addr).await {
                error!(domain = %self.domain, %addr, "failed to delete record: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dns::{MockDnsProvider, ProviderError};
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[tokio::test]
    async fn creates_run_before_deletes() {
        let mut provider = MockDnsProvider::new();
        let mut seq = Sequence::new();

        provider
            .expect_create_record()
            .with(eq("app"), eq(Ipv4Addr::new(1, 2, 3, 4)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));
        provider
            .expect_delete_record()
            .with(eq("app"), eq(Ipv4Addr::new(5, 6, 7, 8)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let runner = Runner::new(Box::new(provider), "app".to_owned());
        runner
            .run(&[Ipv4Addr::new(1, 2, 3, 4)], &[Ipv4Addr::new(5, 6, 7, 8)])
            .await;
    }

    #[tokio::test]
    async fn create_failure_does_not_stop_the_batch() {
        let mut provider = MockDnsProvider::new();
        let mut seq = Sequence::new();

        provider
            .expect_create_record()
            .with(eq("app"), eq(Ipv4Addr::new(1, 2, 3, 4)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|name, addr| {
                Err(ProviderError::NotFound {
                    name: name.to_owned(),
                    addr,
                })
            });
        provider
            .expect_delete_record()
            .with(eq("app"), eq(Ipv4Addr::new(5, 6, 7, 8)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let runner = Runner::new(Box::new(provider), "app".to_owned());
        runner
            .run(&[Ipv4Addr::new(1, 2, 3, 4)], &[Ipv4Addr::new(5, 6, 7, 8)])
            .await;
    }

    #[tokio::test]
    async fn addresses_are_visited_in_the_order_supplied() {
        let mut provider = MockDnsProvider::new();
        let mut seq = Sequence::new();

        for addr in [Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)] {
            provider
                .expect_create_record()
                .with(eq("app"), eq(addr))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_, _| Ok(()));
        }
        provider
            .expect_delete_record()
            .with(eq("app"), eq(Ipv4Addr::new(10, 0, 0, 3)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        let runner = Runner::new(Box::new(provider), "app".to_owned());
        runner
            .run(
                &[Ipv4Addr::new(10, 0, 0, 1), Ipv4Addr::new(10, 0, 0, 2)],
                &[Ipv4Addr::new(10, 0, 0, 3)],
            )
            .await;
    }
}
