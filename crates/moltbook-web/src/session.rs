//! Session Wiring
//!
//! Builds wallet and chain sessions from whatever provider the browser
//! currently exposes. Sessions are constructed per operation rather than
//! cached process-wide, so a handle can never stay bound to a signer the
//! user has switched away from.

use std::rc::Rc;

use alloy_primitives::Address;

use moltbook_chain::transport::{RpcTransport, Transport};
use moltbook_chain::ChainSession;
use moltbook_core::error::WalletError;
use moltbook_core::wallet::{WalletProvider, WalletSession};

use crate::eip1193::Eip1193;

/// The injected browser provider, if present
pub fn provider() -> Option<Rc<Eip1193>> {
    Eip1193::detect().map(Rc::new)
}

/// A wallet session over the current injected provider
pub fn wallet_session() -> WalletSession {
    WalletSession::new(provider().map(|p| p as Rc<dyn WalletProvider>))
}

/// A chain session for the given active account
///
/// Registry handles always bind the fixed read-only endpoint; protocol
/// handles bind the injected wallet when present and degrade to typed
/// defaults otherwise.
pub fn chain_session(account: Option<&str>) -> ChainSession {
    let registry: Rc<dyn Transport> = Rc::new(RpcTransport::default());
    match provider() {
        Some(wallet) => {
            let from = account.and_then(|a| a.parse::<Address>().ok());
            ChainSession::new(wallet as Rc<dyn Transport>, registry, from)
        }
        None => ChainSession::without_wallet(registry),
    }
}

/// Blocking user-facing instruction to install a wallet
pub fn alert_no_provider() {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(&WalletError::ProviderUnavailable.user_message());
    }
}
