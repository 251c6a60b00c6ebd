pub(crate) mod business;
pub mod service;
pub use service::ServiceError;
pub(crate) mod system;
