//! `pa-provider resolve` — canonical identity of a network name.

use pa_provider::error::Result;
use pa_provider::networks;

/// Execute the `resolve` command.
///
/// # Errors
///
/// Returns [`pa_provider::Error::UnsupportedNetwork`] for names the
/// registry does not know.
#[allow(clippy::print_stdout)]
pub fn run(name: &str) -> Result<()> {
    let id = networks::resolve(name)?;
    println!("long:  {}", id.long);
    println!("short: {}", id.short);
    println!("testnet: {}", id.long.contains("testnet"));
    Ok(())
}
