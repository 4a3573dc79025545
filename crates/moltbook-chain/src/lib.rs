//! # moltbook-chain
//!
//! Chain access layer for the Moltbook agent dashboard: contract address
//! registry, `sol!` ABI bindings, the [`Transport`] abstraction over
//! read-only JSON-RPC and injected-wallet providers, the per-connection
//! [`ChainSession`] of typed contract handles, and the services the views
//! call (agent listing, AI enrichment, dashboard aggregation, launchpad
//! purchase).
//!
//! Every service treats remote reads as best-effort: failures are caught at
//! the smallest enclosing boundary and replaced with typed defaults so the
//! views always have something to render.

pub mod abi;
pub mod addresses;
pub mod error;
pub mod services;
pub mod session;
pub mod transport;

pub use error::{ChainError, Result};
pub use session::ChainSession;
pub use transport::{MockChain, NoProviderTransport, RpcTransport, TransactionRequest, Transport};
