#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    #[error("Network {0} has no multisig indexer")]
    NoIndexer(String),
}
