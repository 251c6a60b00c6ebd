use std::{collections::HashMap, time::Duration};

use multisig_types::Network;

use crate::response::IndexerResponse;

pub mod multisig;

#[derive(Debug, Clone)]
pub struct IndexerApi {
    pub network: Network,
    pub client: multisig_transport::client::HttpClient,
}

impl IndexerApi {
    /// `url_template` defaults to the public subscan layout.
    pub fn new(
        network: Network,
        url_template: Option<&str>,
        api_key: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self, crate::Error> {
        let template = url_template.unwrap_or(crate::consts::DEFAULT_URL_TEMPLATE);
        let url = network.indexer_url(template)?;

        let mut headers = HashMap::new();
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            headers.insert(crate::consts::API_KEY_HEADER.to_string(), key.to_string());
        }

        Ok(Self {
            network,
            client: multisig_transport::client::HttpClient::new(&url, Some(headers), timeout)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub async fn post_request<T, R>(&self, endpoint: &str, req: T) -> Result<R, crate::Error>
    where
        T: serde::Serialize + std::fmt::Debug,
        R: serde::de::DeserializeOwned,
    {
        let res = self
            .client
            .post(endpoint)
            .json(req)
            .send::<IndexerResponse<R>>()
            .await?;
        res.process()
    }
}
