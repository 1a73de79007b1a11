//! pa-provider CLI
//!
//! Command-line access to the network registry, the address validator, and
//! the push-transaction endpoints.
//!
//! ```sh
//! pa-provider init                      # Generate default config.toml
//! pa-provider networks                  # List supported networks
//! pa-provider resolve tppc              # Canonical identity of a network
//! pa-provider validate peercoin <addr>  # Structural address check
//! pa-provider broadcast peercoin <hex>  # Push a raw transaction
//! ```

mod cmd;

use clap::Parser;

use cmd::{Cli, Commands};
use pa_provider::telemetry;

#[allow(clippy::print_stderr)]
fn main() {
    dotenvy::dotenv().ok();
    telemetry::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Networks => cmd::networks::run(),
        Commands::Resolve { name } => cmd::resolve::run(&name),
        Commands::Validate { network, address } => cmd::validate::run(&network, &address),
        Commands::Broadcast {
            network,
            raw_tx_hex,
            config,
        } => cmd::broadcast::run(&network, &raw_tx_hex, config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
