pub mod constant;
pub mod error;
pub mod network;
pub use error::Error;
pub use network::{ChainFamily, Network};
