pub mod multisig_queue;

#[derive(Debug, thiserror::Error)]
pub enum BusinessError {
    #[error("Multisig Queue error: {0}")]
    MultisigQueue(#[from] multisig_queue::QueueError),
}

impl BusinessError {
    pub fn get_status_code(&self) -> u32 {
        match self {
            BusinessError::MultisigQueue(msg) => msg.get_status_code(),
        }
    }
}
