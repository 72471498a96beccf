use account_utils::AccountKey;
use async_trait::async_trait;
use corvid_config::{Account, ChainNetwork};
use corvid_primitives::Address;
use std::sync::Arc;

use crate::{
    error::GatewayError,
    http::HttpGateway,
    types::{BlockEvents, ContractSource, OnChainAccount},
};

/// Query and submission surface of an access node.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Creates a new account with `keys`, funded and signed by `signer`.
    async fn create_account(
        &self,
        signer: &Account,
        keys: &[AccountKey],
        contracts: &[ContractSource],
    ) -> Result<OnChainAccount, GatewayError>;

    async fn get_account(&self, address: Address) -> Result<OnChainAccount, GatewayError>;

    async fn get_latest_block_height(&self) -> Result<u64, GatewayError>;

    /// Events of the given types in the inclusive height range, blocks in ascending order.
    async fn get_events(
        &self,
        event_types: &[String],
        start_height: u64,
        end_height: u64,
        page_size: u64,
        parallelism: usize,
    ) -> Result<Vec<BlockEvents>, GatewayError>;
}

/// Builds the gateway that talks to a given network.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait GatewayFactory: Send + Sync {
    fn gateway(&self, network: &ChainNetwork) -> Result<Arc<dyn Gateway>, GatewayError>;
}

/// Connects to the network's configured host over HTTP.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpGatewayFactory;

impl GatewayFactory for HttpGatewayFactory {
    fn gateway(&self, network: &ChainNetwork) -> Result<Arc<dyn Gateway>, GatewayError> {
        Ok(Arc::new(HttpGateway::new(network.host())?))
    }
}
