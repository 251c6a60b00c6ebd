use crate::response::Response;

pub type ReturnType<T> = Response<T>;

pub mod multisig_queue;
pub mod transaction_metadata;
