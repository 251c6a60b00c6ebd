pub mod timestamp;
pub mod transaction_metadata;
