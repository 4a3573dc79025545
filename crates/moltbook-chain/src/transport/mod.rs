//! Transport Abstraction
//!
//! A [`Transport`] issues raw contract calls and transactions on behalf of
//! the typed handles in [`crate::session`]. Implementations:
//!
//! - [`RpcTransport`] — read-only JSON-RPC against the fixed public
//!   endpoint; no wallet required.
//! - [`NoProviderTransport`] — used when no wallet extension is injected;
//!   every operation fails, which the services degrade to typed defaults.
//! - [`MockChain`] — programmable in-memory chain for tests and demos.
//! - the EIP-1193 bridge in `moltbook-web`, which routes through the
//!   injected browser provider.

mod mock;
mod rpc;

pub use mock::MockChain;
pub use rpc::RpcTransport;

use alloy_primitives::{Address, B256, Bytes, U256};
use async_trait::async_trait;

use crate::error::{ChainError, Result};

/// A transaction to be signed and broadcast by the wallet provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionRequest {
    /// Sender account; filled from the active wallet session
    pub from: Option<Address>,

    /// Target contract
    pub to: Address,

    /// Native value attached to the call, in the chain's smallest unit
    pub value: U256,

    /// ABI-encoded calldata
    pub data: Bytes,
}

/// Raw access to a chain endpoint
///
/// `?Send`: all implementations run on the host's single-threaded event
/// loop (browser main thread natively, current-thread runtime in tests).
#[async_trait(?Send)]
pub trait Transport {
    /// Execute a read-only contract call against the latest block
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes>;

    /// Sign and broadcast a transaction, returning its hash once the
    /// network accepts it
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256>;

    /// Resolve once the transaction is finalized; errors on reversion.
    /// No local timeout is imposed.
    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<()>;
}

/// Transport standing in when no wallet provider is injected
///
/// Reads and writes both fail, so signer-bound views degrade to their
/// typed defaults instead of rendering blank.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoProviderTransport;

#[async_trait(?Send)]
impl Transport for NoProviderTransport {
    async fn call(&self, _to: Address, _data: Bytes) -> Result<Bytes> {
        Err(ChainError::ProviderUnavailable)
    }

    async fn send_transaction(&self, _tx: TransactionRequest) -> Result<B256> {
        Err(ChainError::ProviderUnavailable)
    }

    async fn wait_for_confirmation(&self, _tx_hash: B256) -> Result<()> {
        Err(ChainError::ProviderUnavailable)
    }
}
