//! Agent AI Enrichment
//!
//! For each listed agent, fetches a pricing recommendation from the RLM
//! integration module and a lifecycle state from the living agent
//! extension. Each agent's fetch is caught independently: a failure yields
//! the "N/A" placeholder for that agent only and the loop continues, so
//! the result always carries exactly one entry per input agent.

use std::collections::HashMap;

use alloy_primitives::U256;
use tracing::warn;

use moltbook_core::model::{Agent, AgentAiInfo};

use crate::error::Result;
use crate::session::ChainSession;

/// Enrich the given agents with AI-derived metadata, one agent at a time
/// in list order
pub async fn enrich_agents(session: &ChainSession, agents: &[Agent]) -> HashMap<String, AgentAiInfo> {
    let mut enriched = HashMap::with_capacity(agents.len());

    for agent in agents {
        let info = match fetch_agent_ai(session, &agent.agent_id).await {
            Ok(info) => info,
            Err(e) => {
                warn!(agent_id = %agent.agent_id, error = %e, "AI enrichment failed");
                AgentAiInfo::unavailable()
            }
        };
        enriched.insert(agent.agent_id.clone(), info);
    }

    enriched
}

async fn fetch_agent_ai(session: &ChainSession, agent_id: &str) -> Result<AgentAiInfo> {
    let id: U256 = agent_id
        .parse()
        .map_err(|_| crate::error::ChainError::RemoteRead(format!("bad agent id {agent_id}")))?;

    let recommendation = session.rlm.get_pricing_recommendation(id).await?;
    let state = session.living_agent.get_agent_state(id).await?;

    Ok(AgentAiInfo {
        recommendation,
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use alloy_primitives::Address;

    use crate::transport::MockChain;

    fn agent(id: &str) -> Agent {
        Agent {
            agent_id: id.into(),
            owner: "0x3333333333333333333333333333333333333333".into(),
            token_balance: "0".into(),
            reputation: "0".into(),
        }
    }

    fn session_over(chain: Rc<MockChain>) -> ChainSession {
        ChainSession::new(chain.clone(), chain, Some(Address::repeat_byte(0x33)))
    }

    #[tokio::test]
    async fn test_enriches_every_agent() {
        let chain = Rc::new(MockChain::new());
        chain.set_recommendation(U256::from(1u64), "BUY");
        chain.set_agent_state(U256::from(1u64), "Active");
        chain.set_recommendation(U256::from(2u64), "HOLD");
        chain.set_agent_state(U256::from(2u64), "Dormant");
        let session = session_over(chain);

        let enriched = enrich_agents(&session, &[agent("1"), agent("2")]).await;
        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched["1"].recommendation, "BUY");
        assert_eq!(enriched["1"].state, "Active");
        assert_eq!(enriched["2"].recommendation, "HOLD");
        assert_eq!(enriched["2"].state, "Dormant");
    }

    #[tokio::test]
    async fn test_per_agent_failure_degrades_independently() {
        let chain = Rc::new(MockChain::new());
        // Agent 1 has full data; agent 2 has no RLM entry, so its
        // recommendation read reverts.
        chain.set_recommendation(U256::from(1u64), "BUY");
        chain.set_agent_state(U256::from(1u64), "Active");
        chain.set_agent_state(U256::from(2u64), "Active");
        let session = session_over(chain);

        let enriched = enrich_agents(&session, &[agent("1"), agent("2"), agent("3")]).await;

        // Always exactly one entry per input agent.
        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched["1"].recommendation, "BUY");
        assert_eq!(enriched["2"], AgentAiInfo::unavailable());
        assert_eq!(enriched["3"], AgentAiInfo::unavailable());
    }

    #[tokio::test]
    async fn test_empty_input_yields_empty_map() {
        let session = session_over(Rc::new(MockChain::new()));
        assert!(enrich_agents(&session, &[]).await.is_empty());
    }
}
