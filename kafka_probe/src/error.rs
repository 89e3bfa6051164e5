use thiserror::Error;

/// Failures that end a probe stage. Delivery and consume timeouts are not
/// errors, see [`crate::commands::produce_one::DeliveryOutcome`] and
/// [`crate::queries::consume_one::ConsumeOutcome`].
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Failed to connect to bootstrap server {bootstrap}: {source:#}")]
    Connection {
        bootstrap: String,
        #[source]
        source: anyhow::Error,
    },
    #[error("Consumer error: {0:#}")]
    Consumer(#[source] anyhow::Error),
    #[error("Unexpected error: {0:#}")]
    Unexpected(#[source] anyhow::Error),
}
