//! CLI definitions and command implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod broadcast;
pub mod init;
pub mod networks;
pub mod resolve;
pub mod validate;

/// pa-provider — blockchain network registry and broadcast tooling.
#[derive(Debug, Parser)]
#[command(name = "pa-provider")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List the supported networks.
    Networks,

    /// Resolve a network name into its canonical identity.
    Resolve {
        /// Network name, in either its long or short spelling.
        name: String,
    },

    /// Check whether an address is structurally valid for a network.
    Validate {
        /// Network name, in either its long or short spelling.
        network: String,

        /// Address to check.
        address: String,
    },

    /// Push a raw transaction through the remote broadcast endpoint.
    Broadcast {
        /// Network name, in either its long or short spelling.
        network: String,

        /// Raw transaction as a hex string.
        raw_tx_hex: String,

        /// Path to a TOML configuration file overriding the built-in
        /// endpoints.
        #[arg(short, long, env = "PA_PROVIDER_CONFIG")]
        config: Option<PathBuf>,
    },
}
