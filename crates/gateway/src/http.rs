use account_utils::AccountKey;
use async_trait::async_trait;
use corvid_config::Account;
use corvid_primitives::Address;
use futures::{stream, StreamExt, TryStreamExt};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::{
    error::GatewayError,
    gateway::Gateway,
    types::{BlockEvents, ContractSource, CreateAccountRequest, LatestBlock, OnChainAccount},
};

/// [`Gateway`] backed by the JSON REST API of an access node.
#[derive(Clone, Debug)]
pub struct HttpGateway {
    client: Client,
    host: Url,
}

impl HttpGateway {
    pub fn new(host: &str) -> Result<Self, GatewayError> {
        let host = Url::parse(host).map_err(|source| GatewayError::InvalidHost {
            host: host.to_string(),
            source,
        })?;

        let client = Client::builder()
            .user_agent(corvid_version::user_agent())
            .build()?;

        Ok(Self { client, host })
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.host.join(path).map_err(|source| GatewayError::InvalidHost {
            host: self.host.to_string(),
            source,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &Url,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        trace!(target: "corvid::gateway::http", %url, "sending request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice(&body).map_err(|source| GatewayError::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, GatewayError> {
        let request = self.client.get(url.clone());
        self.send(&url, request).await
    }

    async fn events_page(
        &self,
        event_types: &[String],
        start_height: u64,
        end_height: u64,
    ) -> Result<Vec<BlockEvents>, GatewayError> {
        let mut url = self.url("v1/events")?;
        {
            let mut query = url.query_pairs_mut();
            for event_type in event_types {
                query.append_pair("type", event_type);
            }
            query.append_pair("start_height", &start_height.to_string());
            query.append_pair("end_height", &end_height.to_string());
        }

        debug!(target: "corvid::gateway::http", start_height, end_height, "fetching events page");
        self.get(url).await
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn create_account(
        &self,
        signer: &Account,
        keys: &[AccountKey],
        contracts: &[ContractSource],
    ) -> Result<OnChainAccount, GatewayError> {
        let signer_address = signer.address.ok_or_else(|| {
            GatewayError::Validation(format!("signer account {} has no address", signer.name))
        })?;

        let url = self.url("v1/accounts")?;
        let body = CreateAccountRequest {
            signer: signer_address,
            signer_keys: &signer.keys,
            keys,
            contracts,
        };
        let request = self.client.post(url.clone()).json(&body);
        self.send(&url, request).await
    }

    async fn get_account(&self, address: Address) -> Result<OnChainAccount, GatewayError> {
        let url = self.url(&format!("v1/accounts/{address}"))?;
        self.get(url).await
    }

    async fn get_latest_block_height(&self) -> Result<u64, GatewayError> {
        let url = self.url("v1/blocks/latest")?;
        let block: LatestBlock = self.get(url).await?;
        Ok(block.height)
    }

    async fn get_events(
        &self,
        event_types: &[String],
        start_height: u64,
        end_height: u64,
        page_size: u64,
        parallelism: usize,
    ) -> Result<Vec<BlockEvents>, GatewayError> {
        let pages: Vec<Vec<BlockEvents>> = stream::iter(block_ranges(start_height, end_height, page_size))
            .map(|(start, end)| self.events_page(event_types, start, end))
            .buffered(parallelism.max(1))
            .try_collect()
            .await?;

        Ok(pages.into_iter().flatten().collect())
    }
}

/// Splits the inclusive range `[start, end]` into consecutive windows of at most
/// `page_size` heights.
pub(crate) fn block_ranges(start: u64, end: u64, page_size: u64) -> Vec<(u64, u64)> {
    let page_size = page_size.max(1);
    let mut ranges = Vec::new();
    let mut from = start;

    while from <= end {
        let to = from.saturating_add(page_size - 1).min(end);
        ranges.push((from, to));
        if to == u64::MAX {
            break;
        }
        from = to + 1;
    }

    ranges
}
