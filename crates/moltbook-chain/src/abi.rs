//! ABI bindings for on-chain contracts.
//!
//! Uses alloy's `sol!` macro to generate type-safe Rust bindings for the
//! Solidity interfaces the dashboard interacts with:
//!
//! - **IIdentityRegistry** — ERC-8004 identity registry (ownership
//!   enumeration, total supply).
//! - **IReputationRegistry** — ERC-8004 reputation registry (score lookup).
//! - **IAgentToken** — per-agent token balances and total supply.
//! - **IAgentLaunchpad** — value-bearing token purchase.
//! - **IRlmIntegration** — RLM pricing-recommendation lookup.
//! - **ILivingAgentExtension** — agent lifecycle-state lookup.

use alloy_sol_types::sol;

sol! {
    /// ERC-8004 identity registry: enumerates agent ownership.
    interface IIdentityRegistry {
        /// Number of agent identities owned by `owner`.
        function balanceOf(address owner) external view returns (uint256);

        /// Agent identity at `index` within `owner`'s holdings.
        function tokenOfOwnerByIndex(address owner, uint256 index) external view returns (uint256);

        /// Total number of registered agents.
        function totalSupply() external view returns (uint256);
    }
}

sol! {
    /// ERC-8004 reputation registry: scores agents.
    interface IReputationRegistry {
        /// Reputation score for an agent identity.
        function getReputation(uint256 agentId) external view returns (uint256);
    }
}

sol! {
    /// Agent token module: per-agent token accounting.
    interface IAgentToken {
        /// Token balance held by `owner` for agent `agentId`.
        function balanceOf(address owner, uint256 agentId) external view returns (uint256);

        /// Total supply of all agent tokens.
        function totalSupply() external view returns (uint256);
    }
}

sol! {
    /// Agent launchpad module: token purchase entry point.
    interface IAgentLaunchpad {
        /// Buy tokens for `agentId`; payment travels as transaction value.
        function buyTokens(uint256 agentId) external payable;
    }
}

sol! {
    /// RLM integration module: AI pricing recommendations.
    interface IRlmIntegration {
        function getPricingRecommendation(uint256 agentId) external view returns (string memory);
    }
}

sol! {
    /// Living agent extension: agent lifecycle state.
    interface ILivingAgentExtension {
        function getAgentState(uint256 agentId) external view returns (string memory);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, U256};
    use alloy_sol_types::SolCall;

    #[test]
    fn test_identity_registry_calls_construct() {
        let call = IIdentityRegistry::balanceOfCall {
            owner: Address::ZERO,
        };
        assert_eq!(call.owner, Address::ZERO);

        let call = IIdentityRegistry::tokenOfOwnerByIndexCall {
            owner: Address::ZERO,
            index: U256::from(3u64),
        };
        assert_eq!(call.index, U256::from(3u64));

        let _call = IIdentityRegistry::totalSupplyCall {};
    }

    #[test]
    fn test_agent_token_balance_encodes_selector() {
        // balanceOf(address,uint256) selector differs from the ERC-721 one.
        let encoded = IAgentToken::balanceOfCall {
            owner: Address::ZERO,
            agentId: U256::from(42u64),
        }
        .abi_encode();
        assert_eq!(&encoded[..4], IAgentToken::balanceOfCall::SELECTOR);
        assert_ne!(
            IAgentToken::balanceOfCall::SELECTOR,
            IIdentityRegistry::balanceOfCall::SELECTOR
        );
    }

    #[test]
    fn test_buy_tokens_call_roundtrips() {
        let encoded = IAgentLaunchpad::buyTokensCall {
            agentId: U256::from(42u64),
        }
        .abi_encode();
        let decoded = IAgentLaunchpad::buyTokensCall::abi_decode(&encoded).unwrap();
        assert_eq!(decoded.agentId, U256::from(42u64));
    }

    #[test]
    fn test_reputation_call_constructs() {
        let call = IReputationRegistry::getReputationCall {
            agentId: U256::from(7u64),
        };
        assert_eq!(call.agentId, U256::from(7u64));
    }
}
