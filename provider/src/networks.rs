//! Network registry and identity resolution.
//!
//! Every network is known under two spellings: a long name (`"peercoin"`)
//! and a short ticker-style name (`"ppc"`). Callers may use either; the
//! resolver reconciles them into one canonical [`NetworkId`] drawn from a
//! single registry entry. The long name doubles as the lookup key for
//! protocol and chain parameters, and — by deliberate lexical convention —
//! canonical test-network names contain the substring `"testnet"`.

use crate::amount::Amount;
use crate::error::{Error, Result};

/// Chain-level constants for one network.
///
/// The address version bytes feed the validator; fee, denomination and
/// timestamp flag are consumed by upper-layer transaction logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkParams {
    /// Canonical long name, e.g. `"peercoin-testnet"`.
    pub name: &'static str,
    /// Canonical short name, e.g. `"tppc"`.
    pub shortname: &'static str,
    /// Base58Check version byte for pay-to-pubkey-hash addresses.
    pub pubkeyhash_prefix: u8,
    /// Base58Check version byte for pay-to-script-hash addresses.
    pub scripthash_prefix: u8,
    /// WIF private-key prefix byte.
    pub wif_prefix: u8,
    /// P2P message-start magic bytes.
    pub magic: [u8; 4],
    /// Minimum relay fee in minimal units.
    pub min_tx_fee: Amount,
    /// Minimal units per whole coin.
    pub denomination: u64,
    /// Whether transactions carry an explicit timestamp field.
    pub tx_timestamp: bool,
}

/// The static network registry. Read-only after initialization.
pub const NETWORKS: &[NetworkParams] = &[
    NetworkParams {
        name: "peercoin",
        shortname: "ppc",
        pubkeyhash_prefix: 0x37,
        scripthash_prefix: 0x75,
        wif_prefix: 0xb7,
        magic: [0xe6, 0xe8, 0xe9, 0xe5],
        min_tx_fee: Amount::from_units(10_000),
        denomination: 1_000_000,
        tx_timestamp: true,
    },
    NetworkParams {
        name: "peercoin-testnet",
        shortname: "tppc",
        pubkeyhash_prefix: 0x6f,
        scripthash_prefix: 0xc4,
        wif_prefix: 0xef,
        magic: [0xcb, 0xf2, 0xc0, 0xef],
        min_tx_fee: Amount::from_units(10_000),
        denomination: 1_000_000,
        tx_timestamp: true,
    },
    NetworkParams {
        name: "bitcoin",
        shortname: "btc",
        pubkeyhash_prefix: 0x00,
        scripthash_prefix: 0x05,
        wif_prefix: 0x80,
        magic: [0xf9, 0xbe, 0xb4, 0xd9],
        min_tx_fee: Amount::ZERO,
        denomination: 100_000_000,
        tx_timestamp: false,
    },
    NetworkParams {
        name: "bitcoin-testnet",
        shortname: "tbtc",
        pubkeyhash_prefix: 0x6f,
        scripthash_prefix: 0xc4,
        wif_prefix: 0xef,
        magic: [0x0b, 0x11, 0x09, 0x07],
        min_tx_fee: Amount::ZERO,
        denomination: 100_000_000,
        tx_timestamp: false,
    },
    NetworkParams {
        name: "litecoin",
        shortname: "ltc",
        pubkeyhash_prefix: 0x30,
        scripthash_prefix: 0x32,
        wif_prefix: 0xb0,
        magic: [0xfb, 0xc0, 0xb6, 0xdb],
        min_tx_fee: Amount::from_units(100_000),
        denomination: 100_000_000,
        tx_timestamp: false,
    },
];

/// Canonical identity of a resolved network.
///
/// Both fields always come from the same registry entry, so a long/short
/// pair refers to exactly one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkId {
    /// Long registry spelling.
    pub long: &'static str,
    /// Short registry spelling.
    pub short: &'static str,
}

/// Look up chain parameters by either spelling of a network name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedNetwork`] if `name` matches no registry
/// entry. Unknown identifiers are never silently defaulted.
pub fn net_query(name: &str) -> Result<&'static NetworkParams> {
    NETWORKS
        .iter()
        .find(|net| net.name == name || net.shortname == name)
        .ok_or_else(|| Error::UnsupportedNetwork(name.to_owned()))
}

/// Resolve any accepted spelling into the canonical [`NetworkId`].
///
/// A caller who passed the short form still gets the long form, and vice
/// versa. Purely functional over the static registry.
///
/// # Errors
///
/// Returns [`Error::UnsupportedNetwork`] if `name` matches no registry
/// entry.
pub fn resolve(name: &str) -> Result<NetworkId> {
    let params = net_query(name)?;
    Ok(NetworkId {
        long: params.name,
        short: params.shortname,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_spellings_to_the_same_entry() {
        for net in NETWORKS {
            let by_long = resolve(net.name).expect("long spelling resolves");
            let by_short = resolve(net.shortname).expect("short spelling resolves");
            assert_eq!(by_long, by_short);
            assert_eq!(by_long.long, net.name);
            assert_eq!(by_long.short, net.shortname);
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let id = resolve("ppc").expect("resolves");
        assert_eq!(resolve(id.long).expect("resolves"), id);
        assert_eq!(resolve(id.short).expect("resolves"), id);
    }

    #[test]
    fn scenario_peercoin() {
        let id = resolve("peercoin").expect("resolves");
        assert_eq!(id.long, "peercoin");
        assert_eq!(id.short, "ppc");
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["", "dogecoin", "PPC", "peercoin ", "peercoin-mainnet"] {
            assert!(matches!(
                resolve(name),
                Err(Error::UnsupportedNetwork(ref n)) if n == name
            ));
        }
    }

    #[test]
    fn testnet_names_follow_the_lexical_convention() {
        for net in NETWORKS {
            let id = resolve(net.name).expect("resolves");
            // Test networks are exactly those whose long name says so.
            assert_eq!(
                id.long.contains("testnet"),
                id.short.starts_with('t'),
                "registry entry {} breaks the testnet naming convention",
                net.name
            );
        }
    }

    #[test]
    fn net_query_exposes_chain_constants() {
        let peercoin = net_query("peercoin").expect("resolves");
        assert_eq!(peercoin.denomination, 1_000_000);
        assert_eq!(peercoin.pubkeyhash_prefix, 0x37);
        assert!(peercoin.tx_timestamp);

        let bitcoin = net_query("btc").expect("resolves");
        assert_eq!(bitcoin.min_tx_fee, Amount::ZERO);
        assert_eq!(bitcoin.denomination, 100_000_000);
    }
}
