//! `pa-provider broadcast` — push a raw transaction.

use std::path::Path;

use pa_provider::broadcast::send_raw_transaction;
use pa_provider::config::load_config;
use pa_provider::error::{Error, Result};
use pa_provider::networks;

/// Execute the `broadcast` command.
///
/// The payload must be hex; the endpoint is selected by the resolved
/// network's testnet flag. Endpoints come from `config` when given, from
/// the built-in defaults otherwise. The remote response body is printed
/// verbatim.
///
/// # Errors
///
/// Returns an error for unknown networks, non-hex payloads, unreadable
/// configuration, or transport failure.
#[allow(clippy::print_stdout)]
pub fn run(network: &str, raw_tx_hex: &str, config: Option<&Path>) -> Result<()> {
    let id = networks::resolve(network)?;
    if raw_tx_hex.is_empty() || hex::decode(raw_tx_hex).is_err() {
        return Err(Error::Argument(
            "raw transaction must be a non-empty hex string".to_owned(),
        ));
    }

    let broadcast_config = match config {
        Some(path) => load_config(path)?.broadcast,
        None => pa_provider::BroadcastConfig::default(),
    };

    let is_testnet = id.long.contains("testnet");
    tracing::info!(network = id.long, is_testnet, "broadcasting transaction");
    let response = send_raw_transaction(&broadcast_config, is_testnet, raw_tx_hex)?;
    println!("{response}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_networks_before_touching_the_wire() {
        assert!(matches!(
            run("atlantiscoin", "00aabb", None),
            Err(Error::UnsupportedNetwork(_))
        ));
    }

    #[test]
    fn rejects_non_hex_payloads() {
        assert!(matches!(
            run("peercoin", "zz", None),
            Err(Error::Argument(_))
        ));
        assert!(matches!(run("peercoin", "", None), Err(Error::Argument(_))));
    }
}
