//! Variant listing service: raw query parameters in, paginated envelope out.

use crate::domain::pagination::{self, ListError, PageRequest};
use crate::domain::variant::VariantPage;
use crate::storage::variants::VariantGateway;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

#[derive(Clone)]
pub struct VariantService {
    gateway: Arc<dyn VariantGateway>,
    query_timeout: Option<Duration>,
}

impl VariantService {
    pub fn new(gateway: Arc<dyn VariantGateway>) -> Self {
        Self {
            gateway,
            query_timeout: None,
        }
    }

    /// Bounds each gateway call. An elapsed call fails like any other storage error.
    pub fn with_query_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub async fn list(
        &self,
        filter_raw: Option<&str>,
        page_size_raw: Option<&str>,
        page_token_raw: Option<&str>,
    ) -> Result<VariantPage, ListError> {
        let request = PageRequest::parse(filter_raw, page_size_raw, page_token_raw)?;
        debug!(
            language_tag_id = ?request.language_tag_id,
            page_size = request.page_size,
            offset = request.offset,
            "listing variants"
        );

        let fetch = pagination::fetch_page(self.gateway.as_ref(), &request);
        let rows = match self.query_timeout {
            None => fetch.await?,
            Some(limit) => tokio::time::timeout(limit, fetch).await.map_err(|_| {
                ListError::StorageUnavailable(anyhow::anyhow!(
                    "variant query timed out after {:?}",
                    limit
                ))
            })??,
        };

        Ok(pagination::assemble(rows, &request))
    }

    pub async fn ping(&self) -> anyhow::Result<()> {
        self.gateway.ping().await
    }
}
