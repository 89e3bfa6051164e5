use crate::commands::produce_one::{produce_one, DeliveryOutcome, ProduceOneCommand};
use crate::error::ProbeError;
use crate::queries::check_metadata::{check_metadata, CheckMetadataQuery, ClusterMetadata};
use crate::queries::consume_one::{consume_one, ConsumeOneQuery, ConsumeOutcome};

/// The three broker operations a probe run is made of.
#[allow(async_fn_in_trait)]
pub trait ProbeClient {
    async fn check_metadata(
        &self,
        query: CheckMetadataQuery,
    ) -> Result<ClusterMetadata, ProbeError>;

    async fn produce_one(&self, command: ProduceOneCommand) -> Result<DeliveryOutcome, ProbeError>;

    async fn consume_one(&self, query: ConsumeOneQuery) -> Result<ConsumeOutcome, ProbeError>;
}

/// [`ProbeClient`] backed by librdkafka.
#[derive(Debug, Default, Clone, Copy)]
pub struct KafkaProbeClient;

impl ProbeClient for KafkaProbeClient {
    async fn check_metadata(
        &self,
        query: CheckMetadataQuery,
    ) -> Result<ClusterMetadata, ProbeError> {
        check_metadata(query).await
    }

    async fn produce_one(&self, command: ProduceOneCommand) -> Result<DeliveryOutcome, ProbeError> {
        produce_one(command).await
    }

    async fn consume_one(&self, query: ConsumeOneQuery) -> Result<ConsumeOutcome, ProbeError> {
        consume_one(query).await
    }
}
