pub mod endpoint {
    pub mod multisig {
        // paged summaries of multisig calls for an account
        pub const SCAN_MULTISIGS: &str = "api/scan/multisigs";

        // full approval timeline of one call
        pub const SCAN_MULTISIG: &str = "api/scan/multisig";
    }
}

pub const DEFAULT_URL_TEMPLATE: &str = "https://{network}.api.subscan.io";

pub const API_KEY_HEADER: &str = "X-API-Key";

/// Indexer envelope code for success.
pub const SUCCESS_CODE: i64 = 0;
