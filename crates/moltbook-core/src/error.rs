//! Error Types

use thiserror::Error;

/// Result type alias for wallet session operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Wallet session error types
#[derive(Error, Debug)]
pub enum WalletError {
    /// No injected wallet provider detected in the host environment
    #[error("No wallet provider available")]
    ProviderUnavailable,

    /// The user declined the wallet's account-access prompt
    #[error("Account access rejected by user")]
    UserRejected,

    /// The provider returned an error for a request
    #[error("Provider error: {0}")]
    Provider(String),
}

impl WalletError {
    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            WalletError::ProviderUnavailable => {
                "No wallet detected. Please install MetaMask or a compatible wallet.".into()
            }
            WalletError::UserRejected => "Connection request was declined.".into(),
            WalletError::Provider(_) => "The wallet provider encountered an error.".into(),
        }
    }
}
