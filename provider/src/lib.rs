//! Backend-agnostic blockchain state access for PeerAssets-style protocols.
//!
//! This crate defines the [`Provider`] capability contract — the fixed set
//! of query operations every backend (local node RPC, remote block-explorer
//! HTTP API) must implement — together with the network identity resolution,
//! address validation, and testnet-aware broadcast endpoint selection that
//! the contract's derived properties are built from.
//!
//! Concrete backends live outside this crate; they implement [`Provider`]
//! and inherit every derived property from the trait's provided methods.
//!
//! ```
//! use pa_provider::networks;
//!
//! let id = networks::resolve("ppc").unwrap();
//! assert_eq!(id.long, "peercoin");
//! ```

pub mod address;
pub mod amount;
pub mod broadcast;
pub mod config;
pub mod error;
pub mod networks;
pub mod protocol;
pub mod provider;
pub mod telemetry;

pub use amount::Amount;
pub use broadcast::BroadcastConfig;
pub use error::{Error, Result};
pub use networks::{NetworkId, NetworkParams};
pub use protocol::ProtocolParams;
pub use provider::{InputSelection, Provider, Unspent};
