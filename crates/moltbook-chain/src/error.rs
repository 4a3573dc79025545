//! Error Types for Chain Access

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChainError>;

#[derive(Error, Debug)]
pub enum ChainError {
    /// No injected wallet provider; signer-bound calls cannot be issued
    #[error("No wallet provider available")]
    ProviderUnavailable,

    /// A contract read failed at the RPC or decode layer
    #[error("Remote read failed: {0}")]
    RemoteRead(String),

    /// Signing, broadcast, or on-chain reversion of a transaction
    #[error("{0}")]
    Transaction(String),

    /// Transaction attempted over the read-only endpoint
    #[error("Transport is read-only; connect a wallet to send transactions")]
    ReadOnlyTransport,

    /// Malformed address input
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Malformed or out-of-range amount input
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// JSON-RPC level error response
    #[error("RPC error: {0}")]
    Rpc(String),

    /// ABI encode/decode error
    #[error("ABI error: {0}")]
    Abi(#[from] alloy_sol_types::Error),

    /// Network error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
