//! Structural address validation against network encoding parameters.

use crate::networks::NetworkParams;

/// Length of a Base58Check payload for hash-based addresses: one version
/// byte plus a 20-byte hash.
const PAYLOAD_LEN: usize = 21;

/// Check whether `address` is a well-formed Base58Check address for the
/// given network.
///
/// Decoding happens through the external `bs58` facility, which verifies
/// the 4-byte double-SHA256 checksum. Any structural failure — empty input,
/// wrong length, corrupted checksum, or a version byte matching neither the
/// pubkey-hash nor the script-hash prefix — is an ordinary `false`, never
/// an error.
#[must_use]
pub fn validate_address(address: &str, params: &NetworkParams) -> bool {
    let Ok(payload) = bs58::decode(address).with_check(None).into_vec() else {
        return false;
    };
    if payload.len() != PAYLOAD_LEN {
        return false;
    }
    payload[0] == params.pubkeyhash_prefix || payload[0] == params.scripthash_prefix
}
