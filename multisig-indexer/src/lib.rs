pub mod api;
pub mod consts;
pub mod error;
pub mod request;
pub mod response;
pub mod response_vo;
pub use api::IndexerApi;
pub use error::Error;
pub use response_vo::multisig::*;
