//! `pa-provider validate` — structural address check.

use pa_provider::address::validate_address;
use pa_provider::error::Result;
use pa_provider::networks;

/// Execute the `validate` command.
///
/// Prints the verdict; an invalid address is reported through the exit
/// code, not as an error.
///
/// # Errors
///
/// Returns [`pa_provider::Error::UnsupportedNetwork`] for networks the
/// registry does not know.
#[allow(clippy::print_stdout)]
pub fn run(network: &str, address: &str) -> Result<()> {
    let params = networks::net_query(network)?;
    if validate_address(address, params) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        std::process::exit(1);
    }
}
