#[derive(Debug, thiserror::Error)]
pub enum SystemError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
