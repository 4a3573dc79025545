//! Mock Chain Transport
//!
//! For testing and demo purposes. Dispatches on contract address plus
//! function selector and decodes calldata with the same `sol!` bindings
//! the real handles encode with, so tests exercise the full ABI path.
//!
//! Semantics mirror the deployed contracts where it matters for tests:
//! balance and reputation lookups return zero for unknown keys,
//! `tokenOfOwnerByIndex` reverts out of range, and the RLM / lifecycle
//! lookups revert for agents with no entry (which is how per-agent
//! enrichment failure is injected).

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;

use super::{TransactionRequest, Transport};
use crate::abi::{
    IAgentLaunchpad, IAgentToken, IIdentityRegistry, ILivingAgentExtension, IReputationRegistry,
    IRlmIntegration,
};
use crate::addresses::{erc8004, moltbook};
use crate::error::{ChainError, Result};

#[derive(Default)]
struct MockState {
    /// (owner, agent id) pairs in registration order
    agents: Vec<(Address, U256)>,
    reputations: HashMap<U256, U256>,
    token_balances: HashMap<(Address, U256), U256>,
    token_total_supply: U256,
    recommendations: HashMap<U256, String>,
    agent_states: HashMap<U256, String>,
    failing: HashSet<&'static str>,
    send_error: Option<String>,
    confirm_error: Option<String>,
    sent: Vec<TransactionRequest>,
    next_tx: u64,
}

/// Programmable in-memory chain
#[derive(Default)]
pub struct MockChain {
    state: RefCell<MockState>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent identity for `owner`
    pub fn register_agent(&self, owner: Address, agent_id: U256) {
        self.state.borrow_mut().agents.push((owner, agent_id));
    }

    /// Register an agent with its token balance and reputation in one step
    pub fn register_agent_full(
        &self,
        owner: Address,
        agent_id: U256,
        token_balance: U256,
        reputation: U256,
    ) {
        let mut state = self.state.borrow_mut();
        state.agents.push((owner, agent_id));
        state.token_balances.insert((owner, agent_id), token_balance);
        state.reputations.insert(agent_id, reputation);
    }

    pub fn set_token_total_supply(&self, supply: U256) {
        self.state.borrow_mut().token_total_supply = supply;
    }

    pub fn set_recommendation(&self, agent_id: U256, recommendation: impl Into<String>) {
        self.state
            .borrow_mut()
            .recommendations
            .insert(agent_id, recommendation.into());
    }

    pub fn set_agent_state(&self, agent_id: U256, state: impl Into<String>) {
        self.state
            .borrow_mut()
            .agent_states
            .insert(agent_id, state.into());
    }

    /// Make a named read fail; keys match the dispatch table, e.g.
    /// `"identityRegistry.balanceOf"` or `"agentToken.totalSupply"`
    pub fn fail(&self, method: &'static str) {
        self.state.borrow_mut().failing.insert(method);
    }

    /// Make `send_transaction` fail with the given message
    pub fn fail_send(&self, message: impl Into<String>) {
        self.state.borrow_mut().send_error = Some(message.into());
    }

    /// Make `wait_for_confirmation` fail with the given message
    pub fn fail_confirmation(&self, message: impl Into<String>) {
        self.state.borrow_mut().confirm_error = Some(message.into());
    }

    /// Transactions accepted so far
    pub fn sent_transactions(&self) -> Vec<TransactionRequest> {
        self.state.borrow().sent.clone()
    }

    fn check(&self, method: &'static str) -> Result<()> {
        if self.state.borrow().failing.contains(method) {
            return Err(ChainError::RemoteRead(format!("{method}: injected failure")));
        }
        Ok(())
    }

    fn identity_call(&self, data: &[u8]) -> Result<Bytes> {
        if let Ok(call) = IIdentityRegistry::balanceOfCall::abi_decode(data) {
            self.check("identityRegistry.balanceOf")?;
            let count = self
                .state
                .borrow()
                .agents
                .iter()
                .filter(|(owner, _)| *owner == call.owner)
                .count();
            return Ok(encode_uint(U256::from(count)));
        }

        if let Ok(call) = IIdentityRegistry::tokenOfOwnerByIndexCall::abi_decode(data) {
            self.check("identityRegistry.tokenOfOwnerByIndex")?;
            let state = self.state.borrow();
            let owned: Vec<U256> = state
                .agents
                .iter()
                .filter(|(owner, _)| *owner == call.owner)
                .map(|(_, id)| *id)
                .collect();
            let index = usize::try_from(call.index)
                .map_err(|_| ChainError::RemoteRead("index out of range".into()))?;
            return owned
                .get(index)
                .map(|id| encode_uint(*id))
                .ok_or_else(|| ChainError::RemoteRead("execution reverted: owner index out of bounds".into()));
        }

        if IIdentityRegistry::totalSupplyCall::abi_decode(data).is_ok() {
            self.check("identityRegistry.totalSupply")?;
            let count = self.state.borrow().agents.len();
            return Ok(encode_uint(U256::from(count)));
        }

        Err(unhandled(erc8004::IDENTITY_REGISTRY))
    }

    fn reputation_call(&self, data: &[u8]) -> Result<Bytes> {
        if let Ok(call) = IReputationRegistry::getReputationCall::abi_decode(data) {
            self.check("reputationRegistry.getReputation")?;
            let score = self
                .state
                .borrow()
                .reputations
                .get(&call.agentId)
                .copied()
                .unwrap_or(U256::ZERO);
            return Ok(encode_uint(score));
        }

        Err(unhandled(erc8004::REPUTATION_REGISTRY))
    }

    fn agent_token_call(&self, data: &[u8]) -> Result<Bytes> {
        if let Ok(call) = IAgentToken::balanceOfCall::abi_decode(data) {
            self.check("agentToken.balanceOf")?;
            let balance = self
                .state
                .borrow()
                .token_balances
                .get(&(call.owner, call.agentId))
                .copied()
                .unwrap_or(U256::ZERO);
            return Ok(encode_uint(balance));
        }

        if IAgentToken::totalSupplyCall::abi_decode(data).is_ok() {
            self.check("agentToken.totalSupply")?;
            return Ok(encode_uint(self.state.borrow().token_total_supply));
        }

        Err(unhandled(moltbook::AGENT_TOKEN_MODULE))
    }

    fn rlm_call(&self, data: &[u8]) -> Result<Bytes> {
        if let Ok(call) = IRlmIntegration::getPricingRecommendationCall::abi_decode(data) {
            self.check("rlm.getPricingRecommendation")?;
            return self
                .state
                .borrow()
                .recommendations
                .get(&call.agentId)
                .map(|r| encode_string(r))
                .ok_or_else(|| ChainError::RemoteRead("execution reverted".into()));
        }

        Err(unhandled(moltbook::RLM_INTEGRATION_MODULE))
    }

    fn living_agent_call(&self, data: &[u8]) -> Result<Bytes> {
        if let Ok(call) = ILivingAgentExtension::getAgentStateCall::abi_decode(data) {
            self.check("livingAgent.getAgentState")?;
            return self
                .state
                .borrow()
                .agent_states
                .get(&call.agentId)
                .map(|s| encode_string(s))
                .ok_or_else(|| ChainError::RemoteRead("execution reverted".into()));
        }

        Err(unhandled(moltbook::LIVING_AGENT_EXTENSION))
    }
}

fn encode_uint(value: U256) -> Bytes {
    Bytes::from(value.abi_encode())
}

fn encode_string(value: &str) -> Bytes {
    Bytes::from(value.to_string().abi_encode())
}

fn unhandled(to: Address) -> ChainError {
    ChainError::RemoteRead(format!("unhandled call to {to}"))
}

#[async_trait(?Send)]
impl Transport for MockChain {
    async fn call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        let data = data.as_ref();
        match to {
            a if a == erc8004::IDENTITY_REGISTRY => self.identity_call(data),
            a if a == erc8004::REPUTATION_REGISTRY => self.reputation_call(data),
            a if a == moltbook::AGENT_TOKEN_MODULE => self.agent_token_call(data),
            a if a == moltbook::RLM_INTEGRATION_MODULE => self.rlm_call(data),
            a if a == moltbook::LIVING_AGENT_EXTENSION => self.living_agent_call(data),
            other => Err(unhandled(other)),
        }
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256> {
        let mut state = self.state.borrow_mut();
        if let Some(message) = state.send_error.clone() {
            return Err(ChainError::Transaction(message));
        }

        // Only the launchpad accepts transactions in this app.
        if tx.to == moltbook::AGENT_LAUNCHPAD_MODULE {
            IAgentLaunchpad::buyTokensCall::abi_decode(tx.data.as_ref())
                .map_err(|e| ChainError::Transaction(format!("bad calldata: {e}")))?;
        }

        state.next_tx += 1;
        let hash = B256::from(U256::from(state.next_tx));
        state.sent.push(tx);
        Ok(hash)
    }

    async fn wait_for_confirmation(&self, _tx_hash: B256) -> Result<()> {
        if let Some(message) = self.state.borrow().confirm_error.clone() {
            return Err(ChainError::Transaction(message));
        }
        Ok(())
    }
}
