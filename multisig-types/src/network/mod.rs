use crate::constant::network;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
    Substrate,
    Evm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Network {
    Polkadot,
    Kusama,
    Westend,
    Rococo,
    Paseo,
    Astar,
    Shiden,
    Moonbeam,
    Moonriver,
    Ethereum,
    Sepolia,
    Polygon,
    Arbitrum,
    Base,
    Optimism,
}

impl Network {
    pub const ALL: [Network; 15] = [
        Network::Polkadot,
        Network::Kusama,
        Network::Westend,
        Network::Rococo,
        Network::Paseo,
        Network::Astar,
        Network::Shiden,
        Network::Moonbeam,
        Network::Moonriver,
        Network::Ethereum,
        Network::Sepolia,
        Network::Polygon,
        Network::Arbitrum,
        Network::Base,
        Network::Optimism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Polkadot => network::POLKADOT,
            Network::Kusama => network::KUSAMA,
            Network::Westend => network::WESTEND,
            Network::Rococo => network::ROCOCO,
            Network::Paseo => network::PASEO,
            Network::Astar => network::ASTAR,
            Network::Shiden => network::SHIDEN,
            Network::Moonbeam => network::MOONBEAM,
            Network::Moonriver => network::MOONRIVER,
            Network::Ethereum => network::ETHEREUM,
            Network::Sepolia => network::SEPOLIA,
            Network::Polygon => network::POLYGON,
            Network::Arbitrum => network::ARBITRUM,
            Network::Base => network::BASE,
            Network::Optimism => network::OPTIMISM,
        }
    }

    pub fn family(&self) -> ChainFamily {
        match self {
            Network::Ethereum
            | Network::Sepolia
            | Network::Polygon
            | Network::Arbitrum
            | Network::Base
            | Network::Optimism => ChainFamily::Evm,
            _ => ChainFamily::Substrate,
        }
    }

    /// Only substrate networks are served by the multisig indexer.
    pub fn has_multisig_indexer(&self) -> bool {
        self.family() == ChainFamily::Substrate
    }

    /// Expands an indexer url template such as `https://{network}.api.subscan.io`.
    pub fn indexer_url(&self, template: &str) -> Result<String, crate::Error> {
        if !self.has_multisig_indexer() {
            return Err(crate::Error::NoIndexer(self.to_string()));
        }
        Ok(template
            .replace(crate::constant::NETWORK_PLACEHOLDER, self.as_str())
            .trim_end_matches('/')
            .to_string())
    }
}

impl TryFrom<&str> for Network {
    type Error = crate::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let value = value.trim().to_lowercase();
        Network::ALL
            .into_iter()
            .find(|n| n.as_str() == value)
            .ok_or(crate::Error::UnknownNetwork(value))
    }
}

impl TryFrom<String> for Network {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Network::try_from(value.as_str())
    }
}

impl std::str::FromStr for Network {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::try_from(s)
    }
}

impl From<Network> for String {
    fn from(value: Network) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
