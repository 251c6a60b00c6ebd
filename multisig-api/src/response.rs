/// Envelope handed to callers. On failure `data` is the empty value of `T`
/// and `error` carries the message.
#[derive(serde::Serialize, serde::Deserialize, Debug, Default, PartialEq, Eq, Clone)]
pub struct Response<T> {
    pub code: u32,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Response<T> {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl<T> From<Result<T, crate::ServiceError>> for Response<T>
where
    T: serde::Serialize + Default,
{
    fn from(res: Result<T, crate::ServiceError>) -> Self {
        match res {
            Ok(ok) => ok.into(),
            Err(err) => {
                let (code, message) = err.into();
                Response {
                    code,
                    data: T::default(),
                    error: Some(message),
                }
            }
        }
    }
}

/// any type into ok response
impl<T> From<T> for Response<T>
where
    T: serde::Serialize + Sized,
{
    fn from(data: T) -> Self {
        Self {
            code: 200,
            data,
            error: None,
        }
    }
}

impl From<crate::ServiceError> for (u32, String) {
    fn from(err: crate::ServiceError) -> Self {
        if err.is_timeout() {
            tracing::warn!("request timed out: {err}");
            return (504, err.to_string());
        }
        if err.is_network_error() {
            tracing::warn!("network error: {err}");
            return (502, err.to_string());
        }

        let (code, message) = match err {
            crate::ServiceError::Business(msg) => (msg.get_status_code(), msg.to_string()),
            crate::ServiceError::Parameter(_) => (422, err.to_string()),
            crate::ServiceError::System(_) => (500, err.to_string()),
            crate::ServiceError::Utils(_) => (520, err.to_string()),
            crate::ServiceError::Indexer(indexer_err) => map_indexer_error(indexer_err),
            crate::ServiceError::Transport(_) => (531, err.to_string()),
            crate::ServiceError::Types(types_err) => map_types_error(types_err),
            crate::ServiceError::Database(_) => (630, err.to_string()),
            crate::ServiceError::Timeout(_) => (504, err.to_string()),
        };
        tracing::error!(code, "{message}");
        (code, message)
    }
}

// an unusable network surfaces as the business error whatever layer caught it
fn map_indexer_error(err: multisig_indexer::Error) -> (u32, String) {
    match err {
        multisig_indexer::Error::Types(types_err) => map_types_error(types_err),
        _ => (530, err.to_string()),
    }
}

fn map_types_error(err: multisig_types::Error) -> (u32, String) {
    let queue_err = crate::QueueError::InvalidNetwork(err.to_string());
    (queue_err.get_status_code(), queue_err.to_string())
}
