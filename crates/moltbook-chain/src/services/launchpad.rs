//! Launchpad Purchase Flow
//!
//! Submits a value-bearing `buyTokens` transaction and reports status
//! transitions through a caller-supplied sink:
//!
//! `Idle → Submitting → Submitted → Confirmed`, or `Failed` from any
//! in-flight state. On error the flow halts; there is no retry and no
//! partial state. Empty fields are rejected by the disabled buy button in
//! the view, not by a thrown error here.

use std::str::FromStr;

use alloy_primitives::U256;
use rust_decimal::Decimal;
use tracing::{info, warn};

use moltbook_core::model::{PurchaseState, TxStatus};

use crate::addresses::NATIVE_DECIMALS;
use crate::error::{ChainError, Result};
use crate::session::ChainSession;

/// Convert a user-entered decimal amount into the chain's smallest unit
///
/// Exact conversion: rejects negative amounts and more fractional digits
/// than the native unit carries.
pub fn parse_native_amount(amount: &str) -> Result<U256> {
    let amount = amount.trim();
    let decimal = Decimal::from_str(amount)
        .map_err(|_| ChainError::InvalidAmount(format!("'{amount}' is not a number")))?;

    if decimal.is_sign_negative() {
        return Err(ChainError::InvalidAmount("amount cannot be negative".into()));
    }

    let scale = decimal.scale();
    if scale > NATIVE_DECIMALS {
        return Err(ChainError::InvalidAmount(format!(
            "at most {NATIVE_DECIMALS} decimal places supported"
        )));
    }

    // mantissa * 10^(18 - scale); both factors fit comfortably in U256.
    let mantissa = u128::try_from(decimal.mantissa())
        .map_err(|_| ChainError::InvalidAmount("amount cannot be negative".into()))?;
    let factor = U256::from(10u64).pow(U256::from(NATIVE_DECIMALS - scale));
    Ok(U256::from(mantissa) * factor)
}

/// Buy agent tokens through the launchpad
///
/// Emits `Processing transaction...` immediately, `Transaction
/// submitted...` once the network accepts the transaction, and
/// `Transaction confirmed!` on finality. Any error at any stage emits
/// `Transaction failed: <message>` and halts.
pub async fn buy_tokens(
    session: &ChainSession,
    agent_id: &str,
    amount: &str,
    mut on_status: impl FnMut(TxStatus),
) -> PurchaseState {
    match run_purchase(session, agent_id, amount, &mut on_status).await {
        Ok(()) => PurchaseState::Confirmed,
        Err(e) => {
            warn!(agent_id, error = %e, "token purchase failed");
            on_status(TxStatus::error(format!("Transaction failed: {e}")));
            PurchaseState::Failed
        }
    }
}

async fn run_purchase(
    session: &ChainSession,
    agent_id: &str,
    amount: &str,
    on_status: &mut impl FnMut(TxStatus),
) -> Result<()> {
    // Processing is reported before any input validation, so even a
    // malformed field produces the full in-flight transition sequence.
    on_status(TxStatus::info("Processing transaction..."));

    let id = U256::from_str(agent_id.trim())
        .map_err(|_| ChainError::Transaction(format!("'{agent_id}' is not a valid agent id")))?;
    let value = parse_native_amount(amount)?;

    let tx_hash = session.launchpad.buy_tokens(id, value).await?;
    info!(agent_id, %tx_hash, "purchase transaction accepted");

    on_status(TxStatus::info("Transaction submitted..."));
    session.launchpad.wait(tx_hash).await?;
    info!(agent_id, %tx_hash, "purchase transaction confirmed");

    on_status(TxStatus::success("Transaction confirmed!"));
    Ok(())
}
