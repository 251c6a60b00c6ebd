pub mod http;
pub mod parse;
pub mod serde;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Serde error: {0}")]
    Serde(#[from] serde::SerdeError),
    #[error("Parse error: {0}")]
    Parse(#[from] parse::ParseError),
    #[error("Http error: {0}")]
    Http(#[from] http::HttpError),
    #[error("Other error: `{0}`")]
    Other(String),
}

impl Error {
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}
