use crate::broker_address::BrokerAddress;
use crate::commands::produce_one::DeliveryOutcome;
use crate::error::ProbeError;
use crate::queries::check_metadata::ClusterMetadata;
use crate::queries::consume_one::ConsumeOutcome;

#[derive(Debug)]
pub enum ProbeEvent<'a> {
    MetadataChecked {
        bootstrap: &'a [BrokerAddress],
        metadata: &'a ClusterMetadata,
    },
    ConnectionFailed {
        bootstrap: &'a [BrokerAddress],
        error: &'a ProbeError,
    },
    Producing {
        topic: &'a str,
        payload: &'a [u8],
    },
    Delivery(&'a DeliveryOutcome),
    Consuming {
        topic: &'a str,
        group_id: &'a str,
    },
    Consumed {
        outcome: &'a ConsumeOutcome,
        /// `None` when there was nothing to compare.
        matches_produced: Option<bool>,
    },
    ConsumeFailed(&'a ProbeError),
    Unexpected(&'a ProbeError),
}

pub trait ProbeObserver {
    fn notify(&mut self, event: ProbeEvent<'_>);
}
