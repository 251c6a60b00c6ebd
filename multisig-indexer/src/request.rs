#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MultisigsReq {
    pub account: String,
    /// zero-based
    pub page: i64,
    pub row: i64,
}

impl MultisigsReq {
    pub fn new(account: &str, page: i64, row: i64) -> Self {
        Self {
            account: account.to_string(),
            page,
            row,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct MultisigReq {
    pub call_hash: String,
    pub multi_id: String,
}

impl MultisigReq {
    pub fn new(call_hash: &str, multi_id: &str) -> Self {
        Self {
            call_hash: call_hash.to_string(),
            multi_id: multi_id.to_string(),
        }
    }
}
