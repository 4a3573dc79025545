//! Deployed contract addresses
//!
//! Two logical groups: the Moltbook protocol modules, and the external
//! ERC-8004 identity/reputation registry standard. All reads against the
//! registries go through the fixed public endpoint; the protocol modules
//! are reached through the connected wallet.

use alloy_primitives::{Address, address};

/// Fixed public JSON-RPC endpoint for read-only registry calls
/// (Avalanche Fuji C-Chain).
pub const RPC_URL: &str = "https://api.avax-test.network/ext/bc/C/rpc";

/// Decimals of the chain's native unit (AVAX).
pub const NATIVE_DECIMALS: u32 = 18;

/// Moltbook protocol module addresses.
pub mod moltbook {
    use super::{Address, address};

    pub const MOLTBOOK_PROTOCOL: Address = address!("60C9A471ebA6507571329abeae4866EEE005084e");
    pub const AGENT_TOKEN_MODULE: Address = address!("1Bd2d8Ca8dF108D62eb31Ede2d30Ea0992332432");
    pub const AGENT_LAUNCHPAD_MODULE: Address = address!("C53ce0D04c1F44911eA8491879de357e7db4aCEd");
    pub const REVENUE_VAULT_MODULE: Address = address!("BCA10f4e6D892fA358E413f2Bc69c7091E26FcDc");
    pub const ACCESS_CONTROL_MODULE: Address = address!("35c25BfBff6eFc23857B4c39323439Ca16CAf00e");
    pub const RLM_INTEGRATION_MODULE: Address = address!("f65B8A8bA263B11d69083BA1DD832f7d22bBdEb5");
    pub const LIVING_AGENT_EXTENSION: Address = address!("2Ae2753E6ae3d997403024007D1b32B9f066763E");
}

/// ERC-8004 registry addresses.
pub mod erc8004 {
    use super::{Address, address};

    pub const IDENTITY_REGISTRY: Address = address!("8004A818BFB912233c491871b3d84c89A494BD9e");
    pub const REPUTATION_REGISTRY: Address = address!("8004B663056A597Dffe9eCcC1965A193B7388713");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moltbook_addresses_parse() {
        let expected: Address = "0x1Bd2d8Ca8dF108D62eb31Ede2d30Ea0992332432"
            .parse()
            .unwrap();
        assert_eq!(moltbook::AGENT_TOKEN_MODULE, expected);

        let expected: Address = "0xC53ce0D04c1F44911eA8491879de357e7db4aCEd"
            .parse()
            .unwrap();
        assert_eq!(moltbook::AGENT_LAUNCHPAD_MODULE, expected);
    }

    #[test]
    fn test_registry_addresses_parse() {
        let expected: Address = "0x8004A818BFB912233c491871b3d84c89A494BD9e"
            .parse()
            .unwrap();
        assert_eq!(erc8004::IDENTITY_REGISTRY, expected);

        let expected: Address = "0x8004B663056A597Dffe9eCcC1965A193B7388713"
            .parse()
            .unwrap();
        assert_eq!(erc8004::REPUTATION_REGISTRY, expected);
    }

    #[test]
    fn test_rpc_endpoint_is_fuji() {
        assert!(RPC_URL.contains("avax-test.network"));
    }
}
