use std::sync::Arc;

use account_utils::PublicKey;
use corvid_primitives::Address;
use tracing::debug;

use crate::{error::GatewayError, gateway::Gateway, types::BlockEvents};

pub const DEFAULT_PAGE_SIZE: u64 = 250;
pub const DEFAULT_PARALLELISM: usize = 1;

/// Emitted when a key is attached to an account, including at account creation.
pub const ACCOUNT_KEY_ADDED: &str = "flow.AccountKeyAdded";

/// End height keyword that resolves to the latest sealed block.
pub const LATEST: &str = "latest";

/// Event queries over user supplied block ranges.
#[derive(Clone)]
pub struct Events {
    gateway: Arc<dyn Gateway>,
}

impl Events {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// Fetches events named `name` between `start` and `end`, both inclusive.
    ///
    /// `end` may be `"latest"`. Invalid input is rejected before the gateway is queried.
    pub async fn get(
        &self,
        name: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<BlockEvents>, GatewayError> {
        if name.is_empty() {
            return Err(GatewayError::Validation(
                "cannot use empty string as event name".to_string(),
            ));
        }

        let start_height: u64 = start.parse().map_err(|_| {
            GatewayError::Validation(format!(
                "failed to parse start height of block range: {start}"
            ))
        })?;

        let end_height = if end == LATEST {
            self.gateway.get_latest_block_height().await?
        } else {
            end.parse().map_err(|_| {
                GatewayError::Validation(format!(
                    "failed to parse end height of block range: {end}"
                ))
            })?
        };

        if end_height < start_height {
            return Err(GatewayError::Validation(format!(
                "cannot have end height ({end_height}) of block range less that start height ({start_height})"
            )));
        }

        debug!(target: "corvid::gateway::events", name, start_height, end_height, "querying events");
        self.gateway
            .get_events(
                &[name.to_string()],
                start_height,
                end_height,
                DEFAULT_PAGE_SIZE,
                DEFAULT_PARALLELISM,
            )
            .await
    }
}

/// Address of the first account that had `public_key` added, scanning blocks and
/// events in order.
pub fn key_added_address(blocks: &[BlockEvents], public_key: &PublicKey) -> Option<Address> {
    blocks
        .iter()
        .flat_map(|block| block.events.iter())
        .filter(|event| event.event_type == ACCOUNT_KEY_ADDED)
        .find_map(|event| {
            let key = event.payload.get("publicKey")?.as_str()?;
            if !public_key.matches_hex(key) {
                return None;
            }
            event.payload.get("address")?.as_str()?.parse().ok()
        })
}
