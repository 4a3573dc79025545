//! Dashboard Aggregator
//!
//! Produces the consolidated view model for the home view: global counters
//! from two independent reads, each guarded separately so one failing read
//! never blanks the other, plus static placeholder data for the figures
//! the protocol does not expose yet.

use tracing::warn;

use moltbook_core::model::{ActivityItem, DashboardStats};

use crate::session::ChainSession;

/// Fetch dashboard statistics
///
/// Never fails: each remote read defaults independently (0 / "0") and the
/// rest of the view model is static.
pub async fn dashboard_stats(session: &ChainSession) -> DashboardStats {
    let active_agents = match session.identity.total_supply().await {
        Ok(count) => u64::try_from(count).unwrap_or(u64::MAX),
        Err(e) => {
            warn!(error = %e, "failed to read registered agent count");
            0
        }
    };

    let total_tokens = match session.agent_token.total_supply().await {
        Ok(supply) => supply.to_string(),
        Err(e) => {
            warn!(error = %e, "failed to read agent token supply");
            "0".to_string()
        }
    };

    // RLM liveness is not actually probed yet; the module exposes no
    // status call. Known limitation.
    let rlm_active = true;

    DashboardStats {
        active_agents,
        total_tokens,
        // Would come from analytics; static until a data source exists.
        growth_rate: "+12.4%".into(),
        rlm_active,
        recent_activity: recent_activity(),
    }
}

/// Static recent-activity feed placeholder
fn recent_activity() -> Vec<ActivityItem> {
    vec![
        ActivityItem {
            id: "1".into(),
            kind: "A".into(),
            title: "Agent #1247 launched".into(),
            time: "2 hours ago".into(),
            amount: Some("+120 tokens".into()),
            status: "success".into(),
        },
        ActivityItem {
            id: "2".into(),
            kind: "L".into(),
            title: "New launchpad activity".into(),
            time: "5 hours ago".into(),
            amount: Some("+42 tokens".into()),
            status: "info".into(),
        },
        ActivityItem {
            id: "3".into(),
            kind: "R".into(),
            title: "RLM recommendation".into(),
            time: "Yesterday".into(),
            amount: None,
            status: "ai".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use alloy_primitives::{Address, U256};

    use crate::session::ChainSession;
    use crate::transport::MockChain;

    fn session_over(chain: Rc<MockChain>) -> ChainSession {
        ChainSession::new(chain.clone(), chain, None)
    }

    #[tokio::test]
    async fn test_stats_from_live_reads() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent(Address::repeat_byte(0x01), U256::from(1u64));
        chain.register_agent(Address::repeat_byte(0x02), U256::from(2u64));
        chain.set_token_total_supply(U256::from(123_456u64));
        let session = session_over(chain);

        let stats = dashboard_stats(&session).await;
        assert_eq!(stats.active_agents, 2);
        assert_eq!(stats.total_tokens, "123456");
        assert_eq!(stats.growth_rate, "+12.4%");
        assert!(stats.rlm_active);
        assert_eq!(stats.recent_activity.len(), 3);
    }

    #[tokio::test]
    async fn test_each_read_defaults_independently() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent(Address::repeat_byte(0x01), U256::from(1u64));
        chain.set_token_total_supply(U256::from(999u64));
        chain.fail("agentToken.totalSupply");
        let session = session_over(chain);

        let stats = dashboard_stats(&session).await;
        assert_eq!(stats.active_agents, 1);
        assert_eq!(stats.total_tokens, "0");
    }

    #[tokio::test]
    async fn test_all_reads_failing_still_renders() {
        let chain = Rc::new(MockChain::new());
        chain.fail("identityRegistry.totalSupply");
        chain.fail("agentToken.totalSupply");
        let session = session_over(chain);

        let stats = dashboard_stats(&session).await;
        assert_eq!(stats.active_agents, 0);
        assert_eq!(stats.total_tokens, "0");
        assert!(stats.rlm_active);
        // The static feed still renders: three items, fixed tags.
        let kinds: Vec<&str> = stats
            .recent_activity
            .iter()
            .map(|item| item.kind.as_str())
            .collect();
        assert_eq!(kinds, vec!["A", "L", "R"]);
        let statuses: Vec<&str> = stats
            .recent_activity
            .iter()
            .map(|item| item.status.as_str())
            .collect();
        assert_eq!(statuses, vec!["success", "info", "ai"]);
    }

    #[tokio::test]
    async fn test_no_wallet_defaults_token_supply() {
        let chain = Rc::new(MockChain::new());
        chain.register_agent(Address::repeat_byte(0x01), U256::from(1u64));
        chain.set_token_total_supply(U256::from(50u64));
        // Registries stay readable without a wallet; the token module read
        // degrades to "0".
        let session = ChainSession::without_wallet(chain);

        let stats = dashboard_stats(&session).await;
        assert_eq!(stats.active_agents, 1);
        assert_eq!(stats.total_tokens, "0");
    }
}
