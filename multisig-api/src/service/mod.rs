pub mod multisig_queue;
pub mod transaction_metadata;

/// Runs `fut` with a deadline, `what` names the call in the timeout message.
pub(crate) async fn with_timeout<T, E, F>(
    duration: std::time::Duration,
    what: &str,
    fut: F,
) -> Result<T, crate::ServiceError>
where
    F: std::future::Future<Output = Result<T, E>>,
    crate::ServiceError: From<E>,
{
    match tokio::time::timeout(duration, fut).await {
        Ok(res) => Ok(res?),
        Err(_) => Err(crate::ServiceError::Timeout(format!(
            "{what} did not answer within {}ms",
            duration.as_millis()
        ))),
    }
}
