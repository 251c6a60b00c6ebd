pub mod client;
pub mod errors;
pub mod request_builder;

pub use errors::TransportError;
