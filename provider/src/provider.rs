//! The provider capability contract.
//!
//! [`Provider`] is the uniform operation set every backend — a local node's
//! RPC interface or a remote block-explorer HTTP API — must satisfy so that
//! upper-layer protocol logic stays backend-agnostic. All calls are
//! synchronous and block until the underlying transport completes or fails;
//! timeout policy belongs to the backend's transport configuration.
//!
//! Derived properties (`network`, `is_testnet`, parameter lookups) are
//! computed here, not delegated: each one is a cheap pure re-computation
//! over the instance's immutable network identifier and the static
//! registry, so concurrent reads need no locking.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::address;
use crate::amount::Amount;
use crate::broadcast::{self, BroadcastConfig};
use crate::error::{Error, Result};
use crate::networks::{self, NetworkParams};
use crate::protocol::{self, ProtocolParams};

/// One spendable transaction output associated with an address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unspent {
    /// Funding transaction id.
    pub txid: String,
    /// Output index within the funding transaction.
    pub vout: u32,
    /// Output value in minimal units.
    pub amount: Amount,
}

/// A set of inputs covering at least a requested amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSelection {
    /// The selected outputs, in backend order.
    pub utxos: Vec<Unspent>,
    /// Their combined value; always `>=` the requested amount.
    pub total: Amount,
}

/// The abstract operation set every backend implementation must satisfy.
///
/// Block, transaction and difficulty records are opaque JSON mappings; the
/// contract fixes their failure semantics, not their shape.
pub trait Provider: Send + Sync {
    /// The raw network identifier this instance was constructed with.
    ///
    /// Fixed for the instance's lifetime; every derived property below is a
    /// pure function of this value.
    fn net(&self) -> &str;

    /// Block hash at the given height.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if `height` exceeds the chain tip;
    /// [`Error::Unavailable`] on transport failure.
    fn get_block_hash(&self, height: u64) -> Result<String>;

    /// Current chain height.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] on transport failure.
    fn get_block_count(&self) -> Result<u64>;

    /// Full block record keyed by block hash.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the hash is unknown.
    fn get_block(&self, hash: &str) -> Result<Value>;

    /// Current difficulty metrics.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] on transport failure.
    fn get_difficulty(&self) -> Result<Value>;

    /// Confirmed balance of an address.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if the address is malformed.
    fn get_balance(&self, address: &str) -> Result<Amount>;

    /// Total amount ever received by an address.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if the address is malformed.
    fn get_received_by_address(&self, address: &str) -> Result<Amount>;

    /// Spendable outputs of an address, in backend order.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidAddress`] if the address is malformed.
    fn list_unspent(&self, address: &str) -> Result<Vec<Unspent>>;

    /// Raw transaction record; decoded into a structured mapping when
    /// `decode` is set, raw otherwise.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if the txid is unknown.
    fn get_raw_transaction(&self, txid: &str, decode: bool) -> Result<Value>;

    /// Transaction records touching an address, in backend order.
    ///
    /// # Errors
    ///
    /// [`Error::Unavailable`] on transport failure.
    fn list_transactions(&self, address: &str) -> Result<Vec<Value>>;

    /// Select inputs of `address` covering at least `target`.
    ///
    /// The default accumulates [`Provider::list_unspent`] outputs in
    /// backend order until the target is covered. Backends with their own
    /// coin selection may override.
    ///
    /// # Errors
    ///
    /// [`Error::InsufficientFunds`] when the address holdings cannot cover
    /// `target`.
    fn select_inputs(&self, address: &str, target: Amount) -> Result<InputSelection> {
        let mut utxos = Vec::new();
        let mut total = Amount::ZERO;
        if target == Amount::ZERO {
            return Ok(InputSelection { utxos, total });
        }
        for utxo in self.list_unspent(address)? {
            total = total + utxo.amount;
            utxos.push(utxo);
            if total >= target {
                return Ok(InputSelection { utxos, total });
            }
        }
        Err(Error::InsufficientFunds {
            available: total,
            requested: target,
        })
    }

    /// Canonical long network name.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedNetwork`] if the stored identifier cannot be
    /// resolved; never caught internally.
    fn network(&self) -> Result<&'static str> {
        Ok(networks::resolve(self.net())?.long)
    }

    /// Asset-protocol parameters for this network.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::UnsupportedNetwork`] from resolution or from a
    /// network without a protocol deployment.
    fn protocol_params(&self) -> Result<&'static ProtocolParams> {
        protocol::param_query(self.network()?)
    }

    /// Chain-level constants (fee floor, denomination, address prefixes).
    ///
    /// # Errors
    ///
    /// Propagates [`Error::UnsupportedNetwork`] from resolution.
    fn network_params(&self) -> Result<&'static NetworkParams> {
        networks::net_query(self.network()?)
    }

    /// Whether this instance is bound to a test network.
    ///
    /// Deliberately lexical: true iff the canonical long name contains the
    /// substring `"testnet"`. No other heuristic is consulted.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::UnsupportedNetwork`] from resolution.
    fn is_testnet(&self) -> Result<bool> {
        Ok(self.network()?.contains("testnet"))
    }

    /// Whether `address` is structurally valid for this network.
    ///
    /// Invalidity is an ordinary `false`, never an error.
    ///
    /// # Errors
    ///
    /// Only [`Error::UnsupportedNetwork`] from resolving the instance's own
    /// network can propagate.
    fn validate_address(&self, address: &str) -> Result<bool> {
        Ok(address::validate_address(address, self.network_params()?))
    }

    /// Broadcast endpoints used by [`Provider::send_raw_transaction`].
    ///
    /// The default reproduces the historical endpoints; override to supply
    /// deployment-specific configuration.
    fn broadcast_config(&self) -> BroadcastConfig {
        BroadcastConfig::default()
    }

    /// Push a raw transaction through the remote endpoint selected by the
    /// testnet flag, returning the response body verbatim.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::UnsupportedNetwork`] from resolution and
    /// [`Error::Unavailable`] on transport failure.
    fn send_raw_transaction(&self, raw_tx_hex: &str) -> Result<String> {
        broadcast::send_raw_transaction(&self.broadcast_config(), self.is_testnet()?, raw_tx_hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal in-memory backend: enough state to exercise the contract's
    /// provided methods without a transport.
    struct StubBackend {
        net: String,
        utxos: Vec<Unspent>,
    }

    impl StubBackend {
        fn on(net: &str) -> Self {
            Self {
                net: net.to_owned(),
                utxos: Vec::new(),
            }
        }

        fn with_utxos(net: &str, values: &[u64]) -> Self {
            let utxos = values
                .iter()
                .enumerate()
                .map(|(i, &v)| Unspent {
                    txid: format!("{i:064x}"),
                    vout: 0,
                    amount: Amount::from_units(v),
                })
                .collect();
            Self {
                net: net.to_owned(),
                utxos,
            }
        }
    }

    impl Provider for StubBackend {
        fn net(&self) -> &str {
            &self.net
        }

        fn get_block_hash(&self, height: u64) -> Result<String> {
            if height == 0 {
                Ok("genesis".to_owned())
            } else {
                Err(Error::not_found(format!("block at height {height}")))
            }
        }

        fn get_block_count(&self) -> Result<u64> {
            Ok(0)
        }

        fn get_block(&self, hash: &str) -> Result<Value> {
            Err(Error::not_found(format!("block {hash}")))
        }

        fn get_difficulty(&self) -> Result<Value> {
            Ok(serde_json::json!({ "proof-of-stake": 12.5 }))
        }

        fn get_balance(&self, _address: &str) -> Result<Amount> {
            Ok(self.utxos.iter().map(|u| u.amount).sum())
        }

        fn get_received_by_address(&self, address: &str) -> Result<Amount> {
            self.get_balance(address)
        }

        fn list_unspent(&self, _address: &str) -> Result<Vec<Unspent>> {
            Ok(self.utxos.clone())
        }

        fn get_raw_transaction(&self, txid: &str, _decode: bool) -> Result<Value> {
            Err(Error::not_found(format!("transaction {txid}")))
        }

        fn list_transactions(&self, _address: &str) -> Result<Vec<Value>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn derived_network_is_the_long_name() {
        assert_eq!(StubBackend::on("ppc").network().expect("resolves"), "peercoin");
        assert_eq!(
            StubBackend::on("peercoin").network().expect("resolves"),
            "peercoin"
        );
    }

    #[test]
    fn derived_properties_propagate_unsupported_network() {
        let backend = StubBackend::on("atlantiscoin");
        assert!(matches!(
            backend.network(),
            Err(Error::UnsupportedNetwork(_))
        ));
        assert!(matches!(
            backend.network_params(),
            Err(Error::UnsupportedNetwork(_))
        ));
        assert!(matches!(
            backend.protocol_params(),
            Err(Error::UnsupportedNetwork(_))
        ));
        assert!(matches!(
            backend.is_testnet(),
            Err(Error::UnsupportedNetwork(_))
        ));
        assert!(matches!(
            backend.validate_address("anything"),
            Err(Error::UnsupportedNetwork(_))
        ));
    }

    #[test]
    fn is_testnet_is_purely_lexical() {
        assert!(!StubBackend::on("peercoin").is_testnet().expect("resolves"));
        assert!(
            StubBackend::on("peercoin-testnet")
                .is_testnet()
                .expect("resolves")
        );
        // Short spellings resolve to the canonical name first.
        assert!(StubBackend::on("tppc").is_testnet().expect("resolves"));
        assert!(!StubBackend::on("btc").is_testnet().expect("resolves"));
    }

    #[test]
    fn parameter_lookups_are_keyed_by_the_resolved_name() {
        let backend = StubBackend::on("tppc");
        assert_eq!(
            backend.network_params().expect("resolves").name,
            "peercoin-testnet"
        );
        assert_eq!(
            backend.protocol_params().expect("resolves").network_shortname,
            "tppc"
        );
    }

    #[test]
    fn validate_address_never_errors_on_bad_input() {
        let backend = StubBackend::on("bitcoin");
        assert!(!backend.validate_address("").expect("resolves"));
        assert!(!backend.validate_address("garbage").expect("resolves"));
        assert!(
            backend
                .validate_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")
                .expect("resolves")
        );
    }

    #[test]
    fn default_selection_covers_the_target() {
        let backend = StubBackend::with_utxos("peercoin", &[100, 250, 700]);
        let selection = backend
            .select_inputs("addr", Amount::from_units(300))
            .expect("coverable");
        assert_eq!(selection.utxos.len(), 2);
        assert_eq!(selection.total, Amount::from_units(350));
        assert!(selection.total >= Amount::from_units(300));
    }

    #[test]
    fn selection_stops_at_the_first_covering_prefix() {
        let backend = StubBackend::with_utxos("peercoin", &[500, 1]);
        let selection = backend
            .select_inputs("addr", Amount::from_units(500))
            .expect("coverable");
        assert_eq!(selection.utxos.len(), 1);
        assert_eq!(selection.total, Amount::from_units(500));
    }

    #[test]
    fn selection_fails_when_holdings_are_short() {
        let backend = StubBackend::with_utxos("peercoin", &[100, 100]);
        let err = backend
            .select_inputs("addr", Amount::from_units(1_000))
            .expect_err("not coverable");
        assert!(matches!(
            err,
            Error::InsufficientFunds {
                available,
                requested,
            } if available == Amount::from_units(200) && requested == Amount::from_units(1_000)
        ));
    }

    #[test]
    fn zero_target_selects_nothing() {
        let backend = StubBackend::with_utxos("peercoin", &[100]);
        let selection = backend
            .select_inputs("addr", Amount::ZERO)
            .expect("trivially coverable");
        assert!(selection.utxos.is_empty());
        assert_eq!(selection.total, Amount::ZERO);
    }

    #[test]
    fn broadcast_selects_by_the_derived_testnet_flag() {
        use crate::broadcast::select_endpoint;

        let mainnet = StubBackend::on("peercoin");
        let testnet = StubBackend::on("peercoin-testnet");
        let config = BroadcastConfig::default();

        let mainnet_ep = select_endpoint(&config, mainnet.is_testnet().expect("resolves"));
        let testnet_ep = select_endpoint(&config, testnet.is_testnet().expect("resolves"));
        assert!(mainnet_ep.requires_key);
        assert!(!testnet_ep.requires_key);
        assert_ne!(mainnet_ep.template, testnet_ep.template);
    }

    #[test]
    fn contract_stays_object_safe() {
        let backend: Box<dyn Provider> = Box::new(StubBackend::on("peercoin"));
        assert_eq!(backend.network().expect("resolves"), "peercoin");
        assert_eq!(backend.get_block_hash(0).expect("genesis"), "genesis");
        assert!(matches!(
            backend.get_block_hash(10),
            Err(Error::NotFound(_))
        ));
    }
}
