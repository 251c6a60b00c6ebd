use crate::consts::SUCCESS_CODE;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct IndexerResponse<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub generated_at: Option<i64>,
    pub data: Option<T>,
}

impl<T> IndexerResponse<T> {
    pub fn process(self) -> Result<T, crate::Error> {
        if self.code != SUCCESS_CODE {
            tracing::error!(
                code = self.code,
                message = %self.message,
                "indexer response error"
            );
            return Err(crate::Error::Indexer {
                code: self.code,
                message: self.message,
            });
        }
        self.data.ok_or(crate::Error::EmptyData)
    }
}
