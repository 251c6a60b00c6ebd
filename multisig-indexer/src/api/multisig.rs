use super::IndexerApi;
use crate::{
    consts::endpoint,
    request::{MultisigReq, MultisigsReq},
    response_vo::multisig::{MultisigDetail, MultisigList},
};

impl IndexerApi {
    pub async fn multisigs(&self, req: &MultisigsReq) -> Result<MultisigList, crate::Error> {
        self.post_request(endpoint::multisig::SCAN_MULTISIGS, req)
            .await
    }

    pub async fn multisig(&self, req: &MultisigReq) -> Result<MultisigDetail, crate::Error> {
        self.post_request(endpoint::multisig::SCAN_MULTISIG, req)
            .await
    }
}
