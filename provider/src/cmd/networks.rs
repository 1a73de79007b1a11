//! `pa-provider networks` — list the supported networks.

use pa_provider::error::Result;
use pa_provider::networks::NETWORKS;

/// Execute the `networks` command.
///
/// # Errors
///
/// Infallible today; kept fallible for dispatch uniformity.
#[allow(clippy::print_stdout, clippy::unnecessary_wraps)]
pub fn run() -> Result<()> {
    println!("{:<18} {:<6} {}", "network", "short", "testnet");
    for net in NETWORKS {
        println!(
            "{:<18} {:<6} {}",
            net.name,
            net.shortname,
            net.name.contains("testnet")
        );
    }
    Ok(())
}
