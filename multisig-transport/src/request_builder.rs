use crate::TransportError;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;

pub struct ReqBuilder(pub RequestBuilder);

impl ReqBuilder {
    pub fn json(mut self, v: impl Serialize + Debug) -> Self {
        tracing::debug!("request params: {:?}", v);
        self.0 = self.0.json(&v);
        self
    }

    pub async fn send<T: DeserializeOwned>(self) -> Result<T, TransportError> {
        let response = self.send_string().await?;
        Ok(multisig_utils::serde_func::serde_from_str(&response)?)
    }

    /// Raw body of a successful response. Non-2xx statuses become `NodeResponseError`.
    pub async fn send_string(self) -> Result<String, TransportError> {
        let res = self.0.send().await?;

        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            tracing::warn!("[http] status = {status}, body = {text}");
            return Err(TransportError::NodeResponseError(format!("{status}: {text}")));
        }

        tracing::debug!("response = {}", text);
        Ok(text)
    }
}
