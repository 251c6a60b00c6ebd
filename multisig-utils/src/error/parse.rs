#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(i64),
}
