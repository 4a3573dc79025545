//! Read-Only JSON-RPC Transport
//!
//! Issues `eth_call` requests against a fixed public endpoint. Used for
//! the ERC-8004 registries, which never require a wallet. Transactions
//! are rejected: there is no signer behind this transport.

use alloy_primitives::{Address, B256, Bytes};
use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use super::{TransactionRequest, Transport};
use crate::addresses::RPC_URL;
use crate::error::{ChainError, Result};

/// Read-only JSON-RPC transport over HTTP
pub struct RpcTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl Default for RpcTransport {
    fn default() -> Self {
        Self::new(RPC_URL)
    }
}

impl RpcTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http: reqwest::Client::new(),
        }
    }

    /// Extract the `result` hex string from a JSON-RPC response envelope
    fn decode_result(body: &serde_json::Value) -> Result<Bytes> {
        if let Some(error) = body.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown RPC error");
            return Err(ChainError::Rpc(message.to_string()));
        }

        let result = body
            .get("result")
            .and_then(|r| r.as_str())
            .ok_or_else(|| ChainError::Rpc("missing result field".into()))?;

        result
            .parse::<Bytes>()
            .map_err(|e| ChainError::Rpc(format!("malformed result hex: {e}")))
    }
}

#[async_trait(?Send)]
impl Transport for RpcTransport {
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        debug!(%to, "eth_call via {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({
                "jsonrpc": "2.0",
                "method": "eth_call",
                "params": [{"to": to.to_string(), "data": data.to_string()}, "latest"],
                "id": 1,
            }))
            .send()
            .await?;

        let body: serde_json::Value = response.json().await?;
        Self::decode_result(&body)
    }

    async fn send_transaction(&self, _tx: TransactionRequest) -> Result<B256> {
        Err(ChainError::ReadOnlyTransport)
    }

    async fn wait_for_confirmation(&self, _tx_hash: B256) -> Result<()> {
        Err(ChainError::ReadOnlyTransport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_result_ok() {
        let body = json!({"jsonrpc": "2.0", "id": 1, "result": "0x0001"});
        let bytes = RpcTransport::decode_result(&body).unwrap();
        assert_eq!(bytes.as_ref(), &[0x00, 0x01]);
    }

    #[test]
    fn test_decode_result_rpc_error() {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32000, "message": "execution reverted"},
        });
        let err = RpcTransport::decode_result(&body).unwrap_err();
        assert!(matches!(err, ChainError::Rpc(msg) if msg == "execution reverted"));
    }

    #[test]
    fn test_decode_result_missing_field() {
        let body = json!({"jsonrpc": "2.0", "id": 1});
        assert!(RpcTransport::decode_result(&body).is_err());
    }

    #[tokio::test]
    async fn test_send_is_rejected() {
        let transport = RpcTransport::default();
        let result = transport
            .send_transaction(TransactionRequest {
                from: None,
                to: Address::ZERO,
                value: alloy_primitives::U256::ZERO,
                data: Bytes::new(),
            })
            .await;
        assert!(matches!(result, Err(ChainError::ReadOnlyTransport)));
    }
}
