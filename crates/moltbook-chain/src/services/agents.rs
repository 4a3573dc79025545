//! Agent Listing Service
//!
//! Enumerates the agents owned by an address via the identity registry's
//! count + index pattern, then fetches each agent's token balance and
//! reputation in sequence. Any failure anywhere in the pipeline discards
//! partial results and resolves to an empty list: the listing fails
//! closed, never partially populated.

use alloy_primitives::{Address, U256};
use tracing::{debug, warn};

use moltbook_core::model::Agent;

use crate::error::Result;
use crate::session::ChainSession;

/// List all agents owned by `owner`
///
/// An empty or unparseable owner resolves immediately to an empty list.
/// The whole pipeline is re-run on every owner change; there is no
/// incremental diffing and no caching across calls.
pub async fn list_agents(session: &ChainSession, owner: &str) -> Vec<Agent> {
    let owner = owner.trim();
    if owner.is_empty() {
        return Vec::new();
    }

    let Ok(address) = owner.parse::<Address>() else {
        debug!(owner, "not a valid address, resolving to empty list");
        return Vec::new();
    };

    match fetch_agents(session, address, owner).await {
        Ok(agents) => agents,
        Err(e) => {
            warn!(owner, error = %e, "agent listing failed, discarding partial results");
            Vec::new()
        }
    }
}

async fn fetch_agents(session: &ChainSession, address: Address, owner: &str) -> Result<Vec<Agent>> {
    let count = session.identity.balance_of(address).await?;
    debug!(owner, %count, "enumerating owned agents");

    let mut agents = Vec::new();
    let mut index = U256::ZERO;
    while index < count {
        let agent_id = session
            .identity
            .token_of_owner_by_index(address, index)
            .await?;
        let token_balance = session.agent_token.balance_of(address, agent_id).await?;
        let reputation = session.reputation.get_reputation(agent_id).await?;

        agents.push(Agent {
            agent_id: agent_id.to_string(),
            owner: owner.to_string(),
            token_balance: token_balance.to_string(),
            reputation: reputation.to_string(),
        });

        index += U256::from(1u64);
    }

    Ok(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::transport::MockChain;

    const OWNER: &str = "0x3333333333333333333333333333333333333333";

    fn owner_address() -> Address {
        OWNER.parse().unwrap()
    }

    fn session_over(chain: Rc<MockChain>) -> ChainSession {
        ChainSession::new(chain.clone(), chain, Some(owner_address()))
    }

    #[tokio::test]
    async fn test_empty_owner_resolves_to_empty_list() {
        let session = session_over(Rc::new(MockChain::new()));
        assert!(list_agents(&session, "").await.is_empty());
        assert!(list_agents(&session, "   ").await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_owner_resolves_to_empty_list() {
        let session = session_over(Rc::new(MockChain::new()));
        assert!(list_agents(&session, "not-an-address").await.is_empty());
    }

    #[tokio::test]
    async fn test_owner_with_zero_agents() {
        let session = session_over(Rc::new(MockChain::new()));
        assert!(list_agents(&session, OWNER).await.is_empty());
    }

    #[tokio::test]
    async fn test_lists_owned_agents_in_index_order() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent_full(
            owner_address(),
            U256::from(7u64),
            U256::from(120u64),
            U256::from(88u64),
        );
        chain.register_agent_full(
            owner_address(),
            U256::from(12u64),
            U256::from(0u64),
            U256::from(40u64),
        );
        let session = session_over(chain);

        let agents = list_agents(&session, OWNER).await;
        assert_eq!(agents.len(), 2);
        assert_eq!(agents[0].agent_id, "7");
        assert_eq!(agents[0].owner, OWNER);
        assert_eq!(agents[0].token_balance, "120");
        assert_eq!(agents[0].reputation, "88");
        assert_eq!(agents[1].agent_id, "12");
        assert_eq!(agents[1].token_balance, "0");
    }

    #[tokio::test]
    async fn test_mid_pipeline_failure_fails_closed() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent_full(
            owner_address(),
            U256::from(1u64),
            U256::from(10u64),
            U256::from(10u64),
        );
        chain.register_agent_full(
            owner_address(),
            U256::from(2u64),
            U256::from(20u64),
            U256::from(20u64),
        );
        // The second agent's reputation read fails; the first agent's
        // already-fetched data must be discarded too.
        chain.fail("reputationRegistry.getReputation");
        let session = session_over(chain);

        assert!(list_agents(&session, OWNER).await.is_empty());
    }

    #[tokio::test]
    async fn test_count_failure_fails_closed() {
        let chain = Rc::new(MockChain::new());
        chain.fail("identityRegistry.balanceOf");
        let session = session_over(chain);

        assert!(list_agents(&session, OWNER).await.is_empty());
    }
}
