//! EIP-1193 Provider Bridge
//!
//! Wraps the injected `window.ethereum` object behind the
//! [`WalletProvider`] and [`Transport`] traits, so the session manager and
//! the contract handles never touch a global directly.
//!
//! All interaction goes through the provider's single
//! `request({method, params})` entry point: `eth_accounts` (silent),
//! `eth_requestAccounts` (interactive), `eth_call`, `eth_sendTransaction`,
//! and `eth_getTransactionReceipt` for confirmation polling.

use alloy_primitives::{Address, B256, Bytes};
use async_trait::async_trait;
use js_sys::{Array, Function, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use moltbook_chain::error::ChainError;
use moltbook_chain::transport::{TransactionRequest, Transport};
use moltbook_core::error::WalletError;
use moltbook_core::wallet::WalletProvider;

/// EIP-1193 user-rejection error code.
const USER_REJECTED_CODE: f64 = 4001.0;

/// Delay between receipt polls. No overall timeout is imposed.
const RECEIPT_POLL_MS: i32 = 2_000;

/// Bridge over the injected browser wallet provider
pub struct Eip1193 {
    ethereum: JsValue,
}

impl Eip1193 {
    /// Detect the injected provider, if any
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }

    /// Issue a `request({method, params})` call against the provider
    async fn request(&self, method: &str, params: Option<JsValue>) -> Result<JsValue, JsValue> {
        let args = Object::new();
        Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))?;
        if let Some(params) = params {
            Reflect::set(&args, &JsValue::from_str("params"), &params)?;
        }

        let request_fn: Function = Reflect::get(&self.ethereum, &JsValue::from_str("request"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("provider request is not callable"))?;
        let promise: Promise = request_fn
            .call1(&self.ethereum, &args.into())?
            .dyn_into()
            .map_err(|_| JsValue::from_str("provider request did not return a promise"))?;

        JsFuture::from(promise).await
    }
}

/// Best-effort message extraction from a provider error object
fn error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| "provider error".into())
}

fn error_code(err: &JsValue) -> Option<f64> {
    Reflect::get(err, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
}

fn to_wallet_error(err: &JsValue) -> WalletError {
    if error_code(err) == Some(USER_REJECTED_CODE) {
        WalletError::UserRejected
    } else {
        WalletError::Provider(error_message(err))
    }
}

/// Collect a JS array of account addresses into strings
fn account_list(value: &JsValue) -> Vec<String> {
    Array::from(value)
        .iter()
        .filter_map(|entry| entry.as_string())
        .collect()
}

/// Await a JS timeout without blocking the event loop
async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = JsFuture::from(promise).await;
}

#[async_trait(?Send)]
impl WalletProvider for Eip1193 {
    async fn request_accounts(&self) -> moltbook_core::Result<Vec<String>> {
        let accounts = self
            .request("eth_requestAccounts", None)
            .await
            .map_err(|e| to_wallet_error(&e))?;
        Ok(account_list(&accounts))
    }

    async fn read_accounts(&self) -> moltbook_core::Result<Vec<String>> {
        let accounts = self
            .request("eth_accounts", None)
            .await
            .map_err(|e| to_wallet_error(&e))?;
        Ok(account_list(&accounts))
    }

    fn on_accounts_changed(&self, callback: Box<dyn Fn(Vec<String>)>) {
        let Ok(on_fn) = Reflect::get(&self.ethereum, &JsValue::from_str("on")) else {
            return;
        };
        let Ok(on_fn) = on_fn.dyn_into::<Function>() else {
            return;
        };

        let closure = Closure::<dyn FnMut(JsValue)>::new(move |accounts: JsValue| {
            callback(account_list(&accounts));
        });
        let _ = on_fn.call2(
            &self.ethereum,
            &JsValue::from_str("accountsChanged"),
            closure.as_ref().unchecked_ref(),
        );
        // The subscription lives for the app's lifetime.
        closure.forget();
    }
}

#[async_trait(?Send)]
impl Transport for Eip1193 {
    async fn call(&self, to: Address, data: Bytes) -> moltbook_chain::Result<Bytes> {
        let call = Object::new();
        Reflect::set(&call, &JsValue::from_str("to"), &JsValue::from_str(&to.to_string()))
            .map_err(|e| ChainError::Rpc(error_message(&e)))?;
        Reflect::set(
            &call,
            &JsValue::from_str("data"),
            &JsValue::from_str(&data.to_string()),
        )
        .map_err(|e| ChainError::Rpc(error_message(&e)))?;

        let params = Array::of2(&call.into(), &JsValue::from_str("latest"));
        let result = self
            .request("eth_call", Some(params.into()))
            .await
            .map_err(|e| ChainError::Rpc(error_message(&e)))?;

        let hex = result
            .as_string()
            .ok_or_else(|| ChainError::Rpc("non-string eth_call result".into()))?;
        hex.parse::<Bytes>()
            .map_err(|e| ChainError::Rpc(format!("malformed result hex: {e}")))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> moltbook_chain::Result<B256> {
        let request = Object::new();
        let set = |key: &str, value: &str| {
            Reflect::set(&request, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(|e| ChainError::Transaction(error_message(&e)))
        };
        if let Some(from) = tx.from {
            set("from", &from.to_string())?;
        }
        set("to", &tx.to.to_string())?;
        set("value", &format!("0x{:x}", tx.value))?;
        set("data", &tx.data.to_string())?;

        let params = Array::of1(&request.into());
        let result = self
            .request("eth_sendTransaction", Some(params.into()))
            .await
            .map_err(|e| ChainError::Transaction(error_message(&e)))?;

        result
            .as_string()
            .and_then(|hash| hash.parse::<B256>().ok())
            .ok_or_else(|| ChainError::Transaction("malformed transaction hash".into()))
    }

    async fn wait_for_confirmation(&self, tx_hash: B256) -> moltbook_chain::Result<()> {
        loop {
            let params = Array::of1(&JsValue::from_str(&tx_hash.to_string()));
            let receipt = self
                .request("eth_getTransactionReceipt", Some(params.into()))
                .await
                .map_err(|e| ChainError::Transaction(error_message(&e)))?;

            if !receipt.is_null() && !receipt.is_undefined() {
                let status = Reflect::get(&receipt, &JsValue::from_str("status"))
                    .ok()
                    .and_then(|s| s.as_string());
                return match status.as_deref() {
                    // Pre-Byzantium endpoints omit the status field.
                    Some("0x1") | None => Ok(()),
                    _ => Err(ChainError::Transaction("transaction reverted".into())),
                };
            }

            sleep_ms(RECEIPT_POLL_MS).await;
        }
    }
}
