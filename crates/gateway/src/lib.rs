//! Access node client: the chain query surface, event queries and the confirmation
//! poller used while an external wallet creates an account.

pub mod error;
pub mod events;
pub mod gateway;
pub mod http;
pub mod poller;
pub mod types;

pub use self::error::GatewayError;
pub use self::events::{key_added_address, Events, ACCOUNT_KEY_ADDED};
#[cfg(any(test, feature = "mock"))]
pub use self::gateway::{MockGateway, MockGatewayFactory};
pub use self::gateway::{Gateway, GatewayFactory, HttpGatewayFactory};
pub use self::http::HttpGateway;
pub use self::poller::{ConfirmationPoller, PollError, PollOptions};
pub use self::types::{BlockEvents, ContractSource, Event, OnChainAccount};
