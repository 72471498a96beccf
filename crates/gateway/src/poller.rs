use std::{sync::Arc, time::Duration};

use account_utils::PublicKey;
use corvid_primitives::Address;
use tracing::debug;

use crate::{
    error::GatewayError,
    events::{key_added_address, ACCOUNT_KEY_ADDED},
    gateway::Gateway,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollOptions {
    /// Maximum number of blocks past the start height to search before giving up.
    pub height_ceiling: u64,
    pub interval: Duration,
    pub page_size: u64,
    pub parallelism: usize,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            height_ceiling: 200,
            interval: Duration::from_secs(2),
            page_size: 20,
            parallelism: 1,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PollError {
    #[error(
        "no account was created with the key between heights {start} and {end} (ceiling of {ceiling} blocks)"
    )]
    TimedOut { start: u64, end: u64, ceiling: u64 },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Watches the chain for the account an external wallet creates.
pub struct ConfirmationPoller {
    gateway: Arc<dyn Gateway>,
    options: PollOptions,
}

impl ConfirmationPoller {
    pub fn new(gateway: Arc<dyn Gateway>, options: PollOptions) -> Self {
        Self { gateway, options }
    }

    /// Polls until an `AccountKeyAdded` event for `public_key` shows up at or after
    /// `start_height`.
    ///
    /// Every round searches the whole range from `start_height` to the latest block. The
    /// search stops once that range spans more than `height_ceiling` blocks. Gateway
    /// errors end polling immediately.
    pub async fn find_address_for_key(
        &self,
        public_key: &PublicKey,
        start_height: u64,
    ) -> Result<Address, PollError> {
        let event_types = [ACCOUNT_KEY_ADDED.to_string()];
        let PollOptions {
            height_ceiling,
            interval,
            page_size,
            parallelism,
        } = self.options;

        loop {
            let end_height = self.gateway.get_latest_block_height().await?.max(start_height);
            let blocks = self
                .gateway
                .get_events(&event_types, start_height, end_height, page_size, parallelism)
                .await?;

            if let Some(address) = key_added_address(&blocks, public_key) {
                debug!(target: "corvid::gateway::poller", %address, end_height, "found account for key");
                return Ok(address);
            }

            if end_height - start_height > height_ceiling {
                return Err(PollError::TimedOut {
                    start: start_height,
                    end: end_height,
                    ceiling: height_ceiling,
                });
            }

            debug!(
                target: "corvid::gateway::poller",
                start_height,
                end_height,
                retry_in = %humantime::format_duration(interval),
                "account not found yet"
            );
            tokio::time::sleep(interval).await;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        events::test::{key_added, public_key},
        gateway::MockGateway,
    };
    use corvid_primitives::alloy_primitives::address;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn options(height_ceiling: u64) -> PollOptions {
        PollOptions {
            height_ceiling,
            interval: Duration::ZERO,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn finds_account_on_third_round() {
        let key = public_key();
        let key_hex = key.to_hex();

        let mut gateway = MockGateway::new();
        let height = Arc::new(AtomicU64::new(100));
        gateway
            .expect_get_latest_block_height()
            .times(3)
            .returning(move || Ok(height.fetch_add(1, Ordering::SeqCst)));

        let round = AtomicU64::new(0);
        gateway
            .expect_get_events()
            .withf(|types, start, _, page, _| {
                types.len() == 1 && types[0] == ACCOUNT_KEY_ADDED && *start == 100 && *page == 20
            })
            .times(3)
            .returning(move |_, _, end, _, _| {
                if round.fetch_add(1, Ordering::SeqCst) < 2 {
                    Ok(Vec::new())
                } else {
                    Ok(vec![key_added(
                        end,
                        "0x01cf0e2f2f715450000000000000000000000000",
                        &key_hex,
                    )])
                }
            });

        let poller = ConfirmationPoller::new(Arc::new(gateway), options(200));
        let found = poller.find_address_for_key(&key, 100).await.unwrap();
        assert_eq!(found, address!("01cf0e2f2f715450000000000000000000000000"));
    }

    #[tokio::test]
    async fn gives_up_past_ceiling() {
        let mut gateway = MockGateway::new();
        let height = Arc::new(AtomicU64::new(0));
        gateway
            .expect_get_latest_block_height()
            .returning(move || Ok(height.fetch_add(3, Ordering::SeqCst)));
        gateway
            .expect_get_events()
            .withf(|_, start, _, _, _| *start == 0)
            .returning(|_, _, _, _, _| Ok(Vec::new()));

        let poller = ConfirmationPoller::new(Arc::new(gateway), options(10));
        match poller.find_address_for_key(&public_key(), 0).await {
            Err(PollError::TimedOut {
                start: 0,
                end,
                ceiling: 10,
            }) => assert_eq!(end, 12),
            other => panic!("expected timeout, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn latest_below_start_is_clamped() {
        let mut gateway = MockGateway::new();
        gateway.expect_get_latest_block_height().returning(|| Ok(40));
        gateway
            .expect_get_events()
            .withf(|_, start, end, _, _| *start == 50 && *end == 50)
            .times(1)
            .returning(|_, _, _, _, _| {
                Err(GatewayError::Status {
                    status: 503,
                    url: "http://127.0.0.1:8888/v1/events".to_string(),
                    body: String::new(),
                })
            });

        let poller = ConfirmationPoller::new(Arc::new(gateway), options(200));
        let err = poller.find_address_for_key(&public_key(), 50).await.unwrap_err();
        assert!(matches!(err, PollError::Gateway(GatewayError::Status { status: 503, .. })));
    }
}
