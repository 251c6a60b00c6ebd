pub mod network {
    // substrate
    pub const POLKADOT: &str = "polkadot";
    pub const KUSAMA: &str = "kusama";
    pub const WESTEND: &str = "westend";
    pub const ROCOCO: &str = "rococo";
    pub const PASEO: &str = "paseo";
    pub const ASTAR: &str = "astar";
    pub const SHIDEN: &str = "shiden";
    pub const MOONBEAM: &str = "moonbeam";
    pub const MOONRIVER: &str = "moonriver";

    // evm
    pub const ETHEREUM: &str = "ethereum";
    pub const SEPOLIA: &str = "sepolia";
    pub const POLYGON: &str = "polygon";
    pub const ARBITRUM: &str = "arbitrum";
    pub const BASE: &str = "base";
    pub const OPTIMISM: &str = "optimism";
}

/// Placeholder substituted in indexer url templates.
pub const NETWORK_PLACEHOLDER: &str = "{network}";
