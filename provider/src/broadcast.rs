//! Testnet-aware broadcast endpoint selection and the push-transaction call.
//!
//! Two fixed URL templates exist: a mainnet endpoint that embeds a fixed,
//! non-user-supplied API key, and a testnet endpoint that does not. The raw
//! transaction hex is substituted into whichever template the testnet flag
//! selects, submitted as one blocking HTTP GET, and the response body is
//! handed back verbatim. Endpoints and timeouts are startup configuration
//! rather than literals, but the defaults reproduce the historical values.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Substitution marker for the raw transaction hex.
pub const HEX_PLACEHOLDER: &str = "{hex}";
/// Substitution marker for the mainnet API key.
pub const KEY_PLACEHOLDER: &str = "{key}";

const DEFAULT_MAINNET_TEMPLATE: &str =
    "https://chainz.cryptoid.info/ppc/api.dws?q=pushtx&key={key}&hex={hex}";
const DEFAULT_TESTNET_TEMPLATE: &str =
    "https://explorer.thepandacoin.net/api/sendrawtransaction?hex={hex}";
// Historical upstream key; a public constant, not a credential.
const DEFAULT_API_KEY: &str = "1205735eba8c";

/// Broadcast endpoint configuration (the `[broadcast]` TOML table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadcastConfig {
    /// Mainnet push-transaction URL template; takes `{key}` and `{hex}`.
    pub mainnet_template: String,
    /// Testnet push-transaction URL template; takes `{hex}` only.
    pub testnet_template: String,
    /// API key substituted into the mainnet template. Supports `$VAR` /
    /// `${VAR}` environment references when loaded from a config file.
    pub api_key: String,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request read timeout in seconds.
    pub read_timeout_secs: u64,
}

impl Default for BroadcastConfig {
    fn default() -> Self {
        Self {
            mainnet_template: DEFAULT_MAINNET_TEMPLATE.to_owned(),
            testnet_template: DEFAULT_TESTNET_TEMPLATE.to_owned(),
            api_key: DEFAULT_API_KEY.to_owned(),
            connect_timeout_secs: 10,
            read_timeout_secs: 30,
        }
    }
}

/// A selected push-transaction endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// URL template the transaction hex gets substituted into.
    pub template: &'a str,
    /// Whether the template embeds the API key.
    pub requires_key: bool,
}

/// Choose the push-transaction endpoint for the given testnet flag.
#[must_use]
pub fn select_endpoint(config: &BroadcastConfig, is_testnet: bool) -> Endpoint<'_> {
    let template = if is_testnet {
        &config.testnet_template
    } else {
        &config.mainnet_template
    };
    Endpoint {
        template,
        requires_key: template.contains(KEY_PLACEHOLDER),
    }
}

/// Render the selected template into a concrete URL.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] if the rendered result is not a valid URL.
pub fn render_url(config: &BroadcastConfig, is_testnet: bool, raw_tx_hex: &str) -> Result<Url> {
    let endpoint = select_endpoint(config, is_testnet);
    let rendered = endpoint
        .template
        .replace(KEY_PLACEHOLDER, &config.api_key)
        .replace(HEX_PLACEHOLDER, raw_tx_hex);
    Url::parse(&rendered).map_err(|e| Error::unavailable_with("malformed endpoint template", e))
}

/// Push a raw transaction to the selected remote endpoint.
///
/// Thin side-effecting action: one GET, no retries, no validation beyond
/// the transport layer. The response body is decoded as UTF-8 text and
/// returned verbatim.
///
/// # Errors
///
/// Returns [`Error::Unavailable`] on any transport failure, including a
/// response body that is not valid text.
pub fn send_raw_transaction(
    config: &BroadcastConfig,
    is_testnet: bool,
    raw_tx_hex: &str,
) -> Result<String> {
    let url = render_url(config, is_testnet, raw_tx_hex)?;
    tracing::debug!(%url, is_testnet, "pushing raw transaction");

    let client = reqwest::blocking::Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .timeout(Duration::from_secs(config.read_timeout_secs))
        .build()
        .map_err(|e| Error::unavailable_with("failed to build HTTP client", e))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| Error::unavailable_with("push transaction request failed", e))?;
    response
        .text()
        .map_err(|e| Error::unavailable_with("push transaction response unreadable", e))
}
