//! Asset-protocol parameters per network.
//!
//! These constants are owned by the upper protocol layer and only forwarded
//! here: the provider contract looks them up by the canonical network name
//! and treats the bundle as opaque.

use crate::error::{Error, Result};

/// Protocol-level constants for one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtocolParams {
    /// Long network name this bundle applies to.
    pub network_name: &'static str,
    /// Short network name.
    pub network_shortname: &'static str,
    /// Current deck-spawn format version.
    pub deck_version: u16,
    /// Production tag address registrations are sent to.
    pub p2th_address: &'static str,
    /// Tag address for non-production decks.
    pub test_p2th_address: &'static str,
}

/// Registered protocol parameter bundles.
///
/// Only networks the asset protocol is deployed on have an entry; querying
/// any other network is an [`Error::UnsupportedNetwork`].
pub const PARAMS: &[ProtocolParams] = &[
    ProtocolParams {
        network_name: "peercoin",
        network_shortname: "ppc",
        deck_version: 1,
        p2th_address: "PAprodbYvZqf4vjhef49aThB9rSZRxXsM6",
        test_p2th_address: "PAtestUtvGnowsXVTmmZUciYBCJiYZhRo7",
    },
    ProtocolParams {
        network_name: "peercoin-testnet",
        network_shortname: "tppc",
        deck_version: 1,
        p2th_address: "miHhMLaMWubq4Wx6SdTEqZcUHEGp8ZKTZt",
        test_p2th_address: "mvfR2sSxAfmDaGgPcmdsTwPqzS6R9nM5Bo",
    },
];

/// Look up protocol parameters by either spelling of a network name.
///
/// # Errors
///
/// Returns [`Error::UnsupportedNetwork`] if the asset protocol has no
/// parameter bundle for `name`.
pub fn param_query(name: &str) -> Result<&'static ProtocolParams> {
    PARAMS
        .iter()
        .find(|p| p.network_name == name || p.network_shortname == name)
        .ok_or_else(|| Error::UnsupportedNetwork(name.to_owned()))
}
