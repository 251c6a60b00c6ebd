use std::{collections::HashMap, str::FromStr, time::Duration};

use crate::{errors::TransportError, request_builder::ReqBuilder};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(
        base_url: &str,
        headers_opt: Option<HashMap<String, String>>,
        timeout: Option<Duration>,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();

        headers.append(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        if let Some(opt) = headers_opt {
            for (key, value) in opt {
                let name = HeaderName::from_str(&key).map_err(|_| invalid_header(&key))?;
                let value = HeaderValue::from_str(&value).map_err(|_| invalid_header(&key))?;
                headers.append(name, value);
            }
        };

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub fn post(&self, endpoint: &str) -> ReqBuilder {
        let url = self.url(endpoint);
        tracing::info!("request url = {}", url);
        ReqBuilder(self.client.post(url))
    }

    pub async fn post_request<T, U>(&self, endpoint: &str, payload: T) -> Result<U, TransportError>
    where
        T: serde::Serialize + std::fmt::Debug,
        U: serde::de::DeserializeOwned,
    {
        self.post(endpoint).json(payload).send::<U>().await
    }
}

fn invalid_header(key: &str) -> TransportError {
    TransportError::Utils(multisig_utils::Error::Http(
        multisig_utils::HttpError::InvalidHeader(key.to_string()),
    ))
}
