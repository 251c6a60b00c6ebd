pub mod api;
pub mod config;
pub mod domain;
mod error;
mod manager;
pub mod request;
mod response;
pub mod response_vo;
pub mod service;

pub use api::ReturnType;
pub use config::Config;
pub use error::{
    business::{multisig_queue::QueueError, BusinessError},
    system::SystemError,
    ServiceError,
};
pub use manager::QueueManager;
pub use multisig_database::{MetadataStore, TransactionFields, TransactionMetadata};
pub use response::Response;
pub use response_vo::queue::QueueEntry;
