//! Wallet Session Management
//!
//! Tracks the currently connected wallet account and mediates all account
//! access through an injected [`WalletProvider`] capability, so the session
//! logic can be exercised with a test double instead of a real browser
//! extension.
//!
//! The session holds local state only: disconnecting clears the displayed
//! account but cannot revoke provider-level authorization, which is outside
//! this application's control.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::error::{Result, WalletError};

/// Capability interface over an injected wallet provider
///
/// Implement this for each host environment: the browser's EIP-1193 object,
/// or [`MockWalletProvider`] for tests and demos.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Prompt the user for account access (interactive)
    async fn request_accounts(&self) -> Result<Vec<String>>;

    /// Query already-authorized accounts without prompting (silent)
    async fn read_accounts(&self) -> Result<Vec<String>>;

    /// Subscribe to account-change notifications from the provider
    fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>);
}

/// Outcome of an interactive connect attempt
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// Connected; carries the active account address
    Connected(String),

    /// No provider injected; the caller should instruct the user to
    /// install one
    NoProvider,

    /// The user declined the prompt; state is unchanged
    Rejected,
}

/// Wallet session manager
///
/// Exposes the current account address or "unconnected". Overlapping
/// connect calls are not guarded; a second call may be dispatched before
/// the first resolves (accepted best-effort behavior).
pub struct WalletSession {
    provider: Option<Rc<dyn WalletProvider>>,
    account: Option<String>,
}

impl WalletSession {
    /// Create a session over an optional injected provider
    pub fn new(provider: Option<Rc<dyn WalletProvider>>) -> Self {
        Self {
            provider,
            account: None,
        }
    }

    /// Current account address, or `None` when unconnected
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// The underlying provider, if one was injected
    pub fn provider(&self) -> Option<&Rc<dyn WalletProvider>> {
        self.provider.as_ref()
    }

    /// Restore a previously authorized account without prompting
    ///
    /// Fails silently (logs only) if the provider is missing or the call
    /// errors; the account is left absent in both cases.
    pub async fn restore_session(&mut self) {
        let Some(provider) = self.provider.clone() else {
            debug!("no wallet provider injected, skipping session restore");
            return;
        };

        match provider.read_accounts().await {
            Ok(accounts) => {
                if let Some(first) = accounts.into_iter().next() {
                    info!(account = %first, "restored wallet session");
                    self.account = Some(first);
                }
            }
            Err(e) => {
                warn!(error = %e, "failed to restore wallet session");
            }
        }
    }

    /// Interactively connect a wallet
    ///
    /// A rejection leaves the session unconnected and is logged, not
    /// surfaced as a hard error.
    pub async fn connect(&mut self) -> ConnectOutcome {
        let Some(provider) = self.provider.clone() else {
            return ConnectOutcome::NoProvider;
        };

        match provider.request_accounts().await {
            Ok(accounts) => match accounts.into_iter().next() {
                Some(first) => {
                    info!(account = %first, "wallet connected");
                    self.account = Some(first.clone());
                    ConnectOutcome::Connected(first)
                }
                None => {
                    warn!("wallet returned no accounts");
                    ConnectOutcome::Rejected
                }
            },
            Err(WalletError::UserRejected) => {
                info!("wallet connection rejected by user");
                ConnectOutcome::Rejected
            }
            Err(e) => {
                warn!(error = %e, "wallet connection failed");
                ConnectOutcome::Rejected
            }
        }
    }

    /// Clear local account state
    ///
    /// Does not revoke provider-level authorization.
    pub fn disconnect(&mut self) {
        if self.account.take().is_some() {
            info!("wallet disconnected");
        }
    }
}

/// Mock wallet provider for tests and demos
///
/// Scriptable authorized accounts, a rejection switch for the interactive
/// prompt, and manual account-change emission.
#[derive(Default)]
pub struct MockWalletProvider {
    authorized: RefCell<Vec<String>>,
    reject_requests: Cell<bool>,
    callbacks: RefCell<Vec<Box<dyn Fn(Vec<String>)>>>,
}

impl MockWalletProvider {
    /// Provider with the given already-authorized accounts
    pub fn with_accounts(accounts: Vec<String>) -> Self {
        Self {
            authorized: RefCell::new(accounts),
            ..Self::default()
        }
    }

    /// Provider whose interactive prompt the user always declines
    pub fn rejecting() -> Self {
        let provider = Self::default();
        provider.reject_requests.set(true);
        provider
    }

    /// Replace the account set and notify subscribers
    pub fn emit_accounts_changed(&self, accounts: Vec<String>) {
        *self.authorized.borrow_mut() = accounts.clone();
        for callback in self.callbacks.borrow().iter() {
            callback(accounts.clone());
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockWalletProvider {
    async fn request_accounts(&self) -> Result<Vec<String>> {
        if self.reject_requests.get() {
            return Err(WalletError::UserRejected);
        }
        Ok(self.authorized.borrow().clone())
    }

    async fn read_accounts(&self) -> Result<Vec<String>> {
        Ok(self.authorized.borrow().clone())
    }

    fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>) {
        self.callbacks.borrow_mut().push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "0x1111111111111111111111111111111111111111";

    #[tokio::test]
    async fn test_restore_sets_authorized_account() {
        let provider = Rc::new(MockWalletProvider::with_accounts(vec![ALICE.into()]));
        let mut session = WalletSession::new(Some(provider));

        session.restore_session().await;
        assert_eq!(session.account(), Some(ALICE));
    }

    #[tokio::test]
    async fn test_restore_without_authorization_stays_unconnected() {
        let provider = Rc::new(MockWalletProvider::default());
        let mut session = WalletSession::new(Some(provider));

        session.restore_session().await;
        assert_eq!(session.account(), None);
    }

    #[tokio::test]
    async fn test_restore_without_provider_is_silent() {
        let mut session = WalletSession::new(None);
        session.restore_session().await;
        assert_eq!(session.account(), None);
    }

    #[tokio::test]
    async fn test_connect_success() {
        let provider = Rc::new(MockWalletProvider::with_accounts(vec![ALICE.into()]));
        let mut session = WalletSession::new(Some(provider));

        let outcome = session.connect().await;
        assert_eq!(outcome, ConnectOutcome::Connected(ALICE.into()));
        assert_eq!(session.account(), Some(ALICE));
    }

    #[tokio::test]
    async fn test_connect_rejected_leaves_state_unchanged() {
        let provider = Rc::new(MockWalletProvider::rejecting());
        let mut session = WalletSession::new(Some(provider));

        let outcome = session.connect().await;
        assert_eq!(outcome, ConnectOutcome::Rejected);
        assert_eq!(session.account(), None);
    }

    #[tokio::test]
    async fn test_connect_without_provider() {
        let mut session = WalletSession::new(None);
        assert_eq!(session.connect().await, ConnectOutcome::NoProvider);
    }

    #[tokio::test]
    async fn test_disconnect_always_clears_account() {
        let provider = Rc::new(MockWalletProvider::with_accounts(vec![ALICE.into()]));
        let mut session = WalletSession::new(Some(provider));

        session.connect().await;
        assert_eq!(session.account(), Some(ALICE));

        session.disconnect();
        assert_eq!(session.account(), None);

        // Disconnecting an already unconnected session is a no-op.
        session.disconnect();
        assert_eq!(session.account(), None);
    }

    #[tokio::test]
    async fn test_accounts_changed_subscription() {
        let provider = Rc::new(MockWalletProvider::with_accounts(vec![ALICE.into()]));
        let seen: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        provider.on_accounts_changed(Box::new(move |accounts| {
            sink.borrow_mut().push(accounts);
        }));

        provider.emit_accounts_changed(vec![]);
        provider.emit_accounts_changed(vec![ALICE.into()]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_empty());
        assert_eq!(seen[1], vec![ALICE.to_string()]);
    }
}
