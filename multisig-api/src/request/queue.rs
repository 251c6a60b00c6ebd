use multisig_types::Network;

/// Rows returned when the caller gives no usable page size.
pub const DEFAULT_ENTRIES_PER_PAGE: i64 = 1;

/// Caller-facing paging, translated to the indexer's zero-based `page` / `row`.
///
/// Pages 0 and 1 both land on the first indexer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub row: i64,
}

impl PageRequest {
    pub fn new(page_number: Option<i64>, entries_per_page: Option<i64>) -> Self {
        let page = page_number
            .map(|p| p.saturating_sub(1))
            .filter(|p| *p > 0)
            .unwrap_or(0);
        let row = entries_per_page
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_ENTRIES_PER_PAGE);
        Self { page, row }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueFilter {
    /// Calls still collecting approvals.
    Pending,
    /// Calls that reached any terminal status.
    History,
}

impl QueueFilter {
    pub fn accepts(&self, status: multisig_indexer::MultisigStatus) -> bool {
        match self {
            QueueFilter::Pending => status.is_awaiting_approval(),
            QueueFilter::History => !status.is_awaiting_approval(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueueListReq {
    pub multisig_address: String,
    pub network: Network,
    pub page: PageRequest,
}

impl QueueListReq {
    pub fn new(
        multisig_address: &str,
        network: &str,
        page_number: Option<i64>,
        entries_per_page: Option<i64>,
    ) -> Result<Self, crate::ServiceError> {
        let multisig_address = multisig_address.trim();
        if multisig_address.is_empty() {
            return Err(crate::ServiceError::Parameter(
                "multisig address is empty".to_string(),
            ));
        }

        let network = Network::try_from(network)
            .map_err(|e| crate::QueueError::InvalidNetwork(e.to_string()))
            .map_err(crate::BusinessError::from)?;
        if !network.has_multisig_indexer() {
            return Err(crate::BusinessError::from(crate::QueueError::InvalidNetwork(
                multisig_types::Error::NoIndexer(network.to_string()).to_string(),
            ))
            .into());
        }

        Ok(Self {
            multisig_address: multisig_address.to_string(),
            network,
            page: PageRequest::new(page_number, entries_per_page),
        })
    }
}
