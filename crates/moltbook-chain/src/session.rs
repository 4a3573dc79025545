//! Contract Session
//!
//! [`ChainSession`] bundles one typed handle per logical contract. Registry
//! handles bind the read-only transport; protocol handles bind the wallet
//! transport. Sessions are cheap values meant to be rebuilt whenever the
//! active account changes, so a handle can never outlive the signer it was
//! bound to.

use std::rc::Rc;

use alloy_primitives::{Address, B256, Bytes, U256};
use alloy_sol_types::SolCall;

use crate::abi::{
    IAgentLaunchpad, IAgentToken, IIdentityRegistry, ILivingAgentExtension, IReputationRegistry,
    IRlmIntegration,
};
use crate::addresses::{erc8004, moltbook};
use crate::error::Result;
use crate::transport::{NoProviderTransport, TransactionRequest, Transport};

/// A bound reference to a deployed contract plus the transport that
/// carries its calls
#[derive(Clone)]
struct ContractHandle {
    address: Address,
    transport: Rc<dyn Transport>,
}

impl ContractHandle {
    fn new(address: Address, transport: Rc<dyn Transport>) -> Self {
        Self { address, transport }
    }

    async fn call(&self, data: Vec<u8>) -> Result<Bytes> {
        self.transport.call(self.address, Bytes::from(data)).await
    }
}

/// ERC-8004 identity registry handle (read-only)
#[derive(Clone)]
pub struct IdentityRegistry(ContractHandle);

impl IdentityRegistry {
    pub async fn balance_of(&self, owner: Address) -> Result<U256> {
        let ret = self
            .0
            .call(IIdentityRegistry::balanceOfCall { owner }.abi_encode())
            .await?;
        Ok(IIdentityRegistry::balanceOfCall::abi_decode_returns(&ret)?)
    }

    pub async fn token_of_owner_by_index(&self, owner: Address, index: U256) -> Result<U256> {
        let ret = self
            .0
            .call(IIdentityRegistry::tokenOfOwnerByIndexCall { owner, index }.abi_encode())
            .await?;
        Ok(IIdentityRegistry::tokenOfOwnerByIndexCall::abi_decode_returns(&ret)?)
    }

    pub async fn total_supply(&self) -> Result<U256> {
        let ret = self
            .0
            .call(IIdentityRegistry::totalSupplyCall {}.abi_encode())
            .await?;
        Ok(IIdentityRegistry::totalSupplyCall::abi_decode_returns(&ret)?)
    }
}

/// ERC-8004 reputation registry handle (read-only)
#[derive(Clone)]
pub struct ReputationRegistry(ContractHandle);

impl ReputationRegistry {
    pub async fn get_reputation(&self, agent_id: U256) -> Result<U256> {
        let ret = self
            .0
            .call(IReputationRegistry::getReputationCall { agentId: agent_id }.abi_encode())
            .await?;
        Ok(IReputationRegistry::getReputationCall::abi_decode_returns(&ret)?)
    }
}

/// Agent token module handle
#[derive(Clone)]
pub struct AgentToken(ContractHandle);

impl AgentToken {
    pub async fn balance_of(&self, owner: Address, agent_id: U256) -> Result<U256> {
        let call = IAgentToken::balanceOfCall {
            owner,
            agentId: agent_id,
        };
        let ret = self.0.call(call.abi_encode()).await?;
        Ok(IAgentToken::balanceOfCall::abi_decode_returns(&ret)?)
    }

    pub async fn total_supply(&self) -> Result<U256> {
        let ret = self
            .0
            .call(IAgentToken::totalSupplyCall {}.abi_encode())
            .await?;
        Ok(IAgentToken::totalSupplyCall::abi_decode_returns(&ret)?)
    }
}

/// Agent launchpad module handle (signer-bound)
#[derive(Clone)]
pub struct AgentLaunchpad {
    handle: ContractHandle,
    from: Option<Address>,
}

impl AgentLaunchpad {
    /// Submit a value-bearing `buyTokens` transaction; resolves with the
    /// transaction hash once the network accepts it
    pub async fn buy_tokens(&self, agent_id: U256, value: U256) -> Result<B256> {
        let data = IAgentLaunchpad::buyTokensCall { agentId: agent_id }.abi_encode();
        self.handle
            .transport
            .send_transaction(TransactionRequest {
                from: self.from,
                to: self.handle.address,
                value,
                data: Bytes::from(data),
            })
            .await
    }

    /// Resolve once the transaction is finalized; errors on reversion
    pub async fn wait(&self, tx_hash: B256) -> Result<()> {
        self.handle.transport.wait_for_confirmation(tx_hash).await
    }
}

/// RLM integration module handle
#[derive(Clone)]
pub struct RlmIntegration(ContractHandle);

impl RlmIntegration {
    pub async fn get_pricing_recommendation(&self, agent_id: U256) -> Result<String> {
        let call = IRlmIntegration::getPricingRecommendationCall { agentId: agent_id };
        let ret = self.0.call(call.abi_encode()).await?;
        Ok(IRlmIntegration::getPricingRecommendationCall::abi_decode_returns(&ret)?)
    }
}

/// Living agent extension handle
#[derive(Clone)]
pub struct LivingAgentExtension(ContractHandle);

impl LivingAgentExtension {
    pub async fn get_agent_state(&self, agent_id: U256) -> Result<String> {
        let call = ILivingAgentExtension::getAgentStateCall { agentId: agent_id };
        let ret = self.0.call(call.abi_encode()).await?;
        Ok(ILivingAgentExtension::getAgentStateCall::abi_decode_returns(&ret)?)
    }
}

/// One session's worth of contract handles
#[derive(Clone)]
pub struct ChainSession {
    pub identity: IdentityRegistry,
    pub reputation: ReputationRegistry,
    pub agent_token: AgentToken,
    pub launchpad: AgentLaunchpad,
    pub rlm: RlmIntegration,
    pub living_agent: LivingAgentExtension,
    account: Option<Address>,
}

impl ChainSession {
    /// Build a session from a wallet transport (protocol modules) and a
    /// read-only transport (ERC-8004 registries)
    pub fn new(
        wallet: Rc<dyn Transport>,
        registry: Rc<dyn Transport>,
        account: Option<Address>,
    ) -> Self {
        Self {
            identity: IdentityRegistry(ContractHandle::new(
                erc8004::IDENTITY_REGISTRY,
                registry.clone(),
            )),
            reputation: ReputationRegistry(ContractHandle::new(
                erc8004::REPUTATION_REGISTRY,
                registry,
            )),
            agent_token: AgentToken(ContractHandle::new(
                moltbook::AGENT_TOKEN_MODULE,
                wallet.clone(),
            )),
            launchpad: AgentLaunchpad {
                handle: ContractHandle::new(moltbook::AGENT_LAUNCHPAD_MODULE, wallet.clone()),
                from: account,
            },
            rlm: RlmIntegration(ContractHandle::new(
                moltbook::RLM_INTEGRATION_MODULE,
                wallet.clone(),
            )),
            living_agent: LivingAgentExtension(ContractHandle::new(
                moltbook::LIVING_AGENT_EXTENSION,
                wallet,
            )),
            account,
        }
    }

    /// Session with no wallet: registry reads work, protocol calls fail
    /// with a provider-unavailable error that the services degrade to
    /// typed defaults
    pub fn without_wallet(registry: Rc<dyn Transport>) -> Self {
        Self::new(Rc::new(NoProviderTransport), registry, None)
    }

    /// Account this session's signer-bound handles act as
    pub fn account(&self) -> Option<Address> {
        self.account
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockChain;

    const OWNER: Address = Address::repeat_byte(0x22);

    fn mock_session(chain: Rc<MockChain>) -> ChainSession {
        ChainSession::new(chain.clone(), chain, Some(OWNER))
    }

    #[tokio::test]
    async fn test_handles_roundtrip_through_transport() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent_full(OWNER, U256::from(3u64), U256::from(500u64), U256::from(90u64));
        let session = mock_session(chain);

        assert_eq!(
            session.identity.balance_of(OWNER).await.unwrap(),
            U256::from(1u64)
        );
        let id = session
            .identity
            .token_of_owner_by_index(OWNER, U256::ZERO)
            .await
            .unwrap();
        assert_eq!(id, U256::from(3u64));
        assert_eq!(
            session.agent_token.balance_of(OWNER, id).await.unwrap(),
            U256::from(500u64)
        );
        assert_eq!(
            session.reputation.get_reputation(id).await.unwrap(),
            U256::from(90u64)
        );
    }

    #[tokio::test]
    async fn test_launchpad_sends_from_session_account() {
        let chain = Rc::new(MockChain::new());
        let session = mock_session(chain.clone());

        session
            .launchpad
            .buy_tokens(U256::from(42u64), U256::from(1000u64))
            .await
            .unwrap();

        let sent = chain.sent_transactions();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].from, Some(OWNER));
        assert_eq!(sent[0].to, moltbook::AGENT_LAUNCHPAD_MODULE);
        assert_eq!(sent[0].value, U256::from(1000u64));
    }

    #[tokio::test]
    async fn test_session_without_wallet_degrades_protocol_calls() {
        let chain = Rc::new(MockChain::new());
        chain.set_token_total_supply(U256::from(7u64));
        let session = ChainSession::without_wallet(chain);

        // Registry reads work without a wallet.
        assert!(session.identity.total_supply().await.is_ok());
        // Protocol module reads do not.
        assert!(session.agent_token.total_supply().await.is_err());
        assert_eq!(session.account(), None);
    }
}
