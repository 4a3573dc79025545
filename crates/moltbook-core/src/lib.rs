//! # moltbook-core
//!
//! Core building blocks for the Moltbook agent dashboard: the data model
//! shared by the services and the view layer, and the wallet session
//! manager that tracks the currently connected account.
//!
//! Everything here is chain-agnostic and UI-agnostic. Contract access lives
//! in `moltbook-chain`; rendering lives in `moltbook-web`.

pub mod error;
pub mod model;
pub mod wallet;

pub use error::{Result, WalletError};
pub use model::{
    ActivityItem, Agent, AgentAiInfo, DashboardStats, PurchaseState, StatusKind, TxStatus,
};
pub use wallet::{ConnectOutcome, MockWalletProvider, WalletProvider, WalletSession};
