pub mod transaction_metadata;
