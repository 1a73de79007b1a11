//! Unified error types for the provider contract.

use thiserror::Error;

use crate::amount::Amount;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for provider operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A network identifier could not be resolved against the registry.
    #[error(
        "unsupported network '{0}': not known to the registry, \
         see `networks::NETWORKS` for the supported networks"
    )]
    UnsupportedNetwork(String),

    /// A backend operation was given a structurally invalid address.
    ///
    /// Address *validation* never surfaces this; it is normalized to a
    /// plain `false` inside [`crate::address::validate_address`].
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// A queried entity (block, transaction) does not exist on the backend.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input selection could not cover the requested amount.
    #[error("insufficient funds: {available} available, {requested} requested")]
    InsufficientFunds {
        /// Total value of the outputs the address holds.
        available: Amount,
        /// Amount the caller asked to cover.
        requested: Amount,
    },

    /// Transport-level failure (network error, malformed response) from
    /// either an RPC or an HTTP backend.
    #[error("provider unavailable: {0}")]
    Unavailable(String),

    /// Configuration file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Invalid command-line argument.
    #[error("argument: {0}")]
    Argument(String),
}

impl Error {
    /// Shorthand for [`Error::Unavailable`].
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// [`Error::Unavailable`] with an underlying cause appended.
    pub fn unavailable_with(msg: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Unavailable(format!("{}: {cause}", msg.into()))
    }

    /// Shorthand for [`Error::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// [`Error::Config`] with an underlying cause appended.
    pub fn config_with(msg: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {cause}", msg.into()))
    }

    /// Shorthand for [`Error::NotFound`].
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
