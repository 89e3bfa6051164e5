use crate::commands::produce_one::DeliveryOutcome;
use crate::error::ProbeError;
use crate::queries::check_metadata::ClusterMetadata;
use crate::queries::consume_one::ConsumeOutcome;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ProbeStage {
    #[default]
    Idle,
    MetadataChecked,
    Produced,
    Consumed,
    Failed,
}

#[derive(Debug, Default)]
pub struct ProbeReport {
    pub stage: ProbeStage,
    pub metadata: Option<ClusterMetadata>,
    pub delivery: Option<DeliveryOutcome>,
    pub consume: Option<ConsumeOutcome>,
    pub error: Option<ProbeError>,
}

impl ProbeReport {
    pub(crate) fn fail(&mut self, error: ProbeError) {
        self.stage = ProbeStage::Failed;
        self.error = Some(error);
    }

    /// Whether the consumed payload equals the produced one.
    pub fn round_trip_matched(&self) -> Option<bool> {
        matches_produced(self.delivery.as_ref()?, self.consume.as_ref()?)
    }
}

pub(crate) fn matches_produced(
    delivery: &DeliveryOutcome,
    consume: &ConsumeOutcome,
) -> Option<bool> {
    match (delivery.delivered_payload(), consume) {
        (Some(produced), ConsumeOutcome::Received(message)) => Some(message.payload == produced),
        _ => None,
    }
}
