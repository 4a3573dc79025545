//! Data Model
//!
//! View-model types shared between the chain services and the view layer.
//! Every remote-derived value here is a best-effort snapshot; nothing in
//! this module guarantees consistency with on-chain state beyond the
//! instant of the read that produced it.

use serde::{Deserialize, Serialize};

/// An on-chain agent identity owned by some address
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Opaque numeric identity, string-encoded
    pub agent_id: String,

    /// Owner wallet address
    pub owner: String,

    /// Agent token balance (numeric string)
    pub token_balance: String,

    /// Reputation score from the reputation registry (numeric string)
    pub reputation: String,
}

/// AI-derived metadata for an agent, keyed by agent identity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAiInfo {
    /// Pricing recommendation from the RLM integration module
    pub recommendation: String,

    /// Lifecycle state from the living agent extension
    pub state: String,
}

impl AgentAiInfo {
    /// Placeholder entry rendered when enrichment fails for an agent
    pub fn unavailable() -> Self {
        Self {
            recommendation: "N/A".into(),
            state: "N/A".into(),
        }
    }
}

/// One entry in the dashboard's recent-activity feed
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,

    /// Single-letter category tag ("A", "L", "R")
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    /// Display string, not a timestamp
    pub time: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    /// Category tag driving display color ("success", "info", "ai")
    pub status: String,
}

/// Consolidated view model for the home view
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Total registered agents in the identity registry
    pub active_agents: u64,

    /// Total agent token supply (numeric string)
    pub total_tokens: String,

    /// Static display string, not derived from any read
    pub growth_rate: String,

    /// RLM subsystem liveness flag (currently not actually probed)
    pub rlm_active: bool,

    pub recent_activity: Vec<ActivityItem>,
}

/// Category of a transaction status message
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// A status message emitted during the launchpad purchase flow
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxStatus {
    pub message: String,
    pub kind: StatusKind,
}

impl TxStatus {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Info,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: StatusKind::Error,
        }
    }
}

/// Launchpad purchase flow state machine
///
/// `Idle → Submitting → Submitted → Confirmed` on success,
/// dropping to `Failed` from any in-flight state on error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseState {
    Idle,
    Submitting,
    Submitted,
    Confirmed,
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_placeholder() {
        let info = AgentAiInfo::unavailable();
        assert_eq!(info.recommendation, "N/A");
        assert_eq!(info.state, "N/A");
    }

    #[test]
    fn test_activity_item_serializes_type_tag() {
        let item = ActivityItem {
            id: "1".into(),
            kind: "A".into(),
            title: "Agent #1247 launched".into(),
            time: "2 hours ago".into(),
            amount: Some("+120 tokens".into()),
            status: "success".into(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "A");
        assert_eq!(json["status"], "success");
    }

    #[test]
    fn test_status_kind_serialization() {
        let status = TxStatus::error("Transaction failed: reverted");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["kind"], "error");
    }
}
