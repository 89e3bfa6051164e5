mod client;
mod observer;
mod report;
mod settings;

pub use client::*;
pub use observer::*;
pub use report::*;
pub use settings::*;

use crate::commands::produce_one::{probe_payload, ProduceOneCommand};
use crate::error::ProbeError;
use crate::queries::check_metadata::CheckMetadataQuery;
use crate::queries::consume_one::{fresh_group_id, ConsumeOneQuery};
use chrono::Local;
use tracing::{info, warn};

/// Checks metadata, produces one message and consumes one message, in that
/// order. A failed metadata check skips the other two stages. Every outcome is
/// reported to `observer`; nothing is returned as an error.
#[tracing::instrument(skip_all)]
pub async fn run_probe<C, O>(
    client: &C,
    settings: &ProbeSettings,
    observer: &mut O,
) -> ProbeReport
where
    C: ProbeClient,
    O: ProbeObserver,
{
    let mut report = ProbeReport::default();

    let query = CheckMetadataQuery {
        connection_settings: settings.connection_settings.clone(),
        timeout: settings.metadata_timeout,
    };
    let metadata = match client.check_metadata(query).await {
        Ok(metadata) => metadata,
        Err(error) => {
            warn!("Metadata check failed: {error}");
            observer.notify(ProbeEvent::ConnectionFailed {
                bootstrap: settings.bootstrap(),
                error: &error,
            });
            report.fail(error);
            return report;
        }
    };

    observer.notify(ProbeEvent::MetadataChecked {
        bootstrap: settings.bootstrap(),
        metadata: &metadata,
    });
    report.stage = ProbeStage::MetadataChecked;
    report.metadata = Some(metadata);

    let payload = probe_payload(&Local::now()).into_bytes();
    observer.notify(ProbeEvent::Producing {
        topic: &settings.topic,
        payload: &payload,
    });

    let command = ProduceOneCommand {
        connection_settings: settings.connection_settings.clone(),
        topic: settings.topic.clone(),
        payload,
        flush_timeout: settings.flush_timeout,
        message_timeout: settings.message_timeout,
    };
    let delivery = match client.produce_one(command).await {
        Ok(delivery) => delivery,
        Err(error) => {
            observer.notify(ProbeEvent::Unexpected(&error));
            report.fail(error);
            return report;
        }
    };

    observer.notify(ProbeEvent::Delivery(&delivery));
    report.stage = ProbeStage::Produced;
    info!("Produce stage finished: {:?}", delivery);

    let group_id = settings.group_id.clone().unwrap_or_else(fresh_group_id);
    observer.notify(ProbeEvent::Consuming {
        topic: &settings.topic,
        group_id: &group_id,
    });

    let query = ConsumeOneQuery {
        connection_settings: settings.connection_settings.clone(),
        topic: settings.topic.clone(),
        group_id,
        auto_offset_reset: settings.auto_offset_reset,
        timeout: settings.consume_timeout,
        expected_payload: delivery.delivered_payload().map(<[u8]>::to_vec),
    };
    match client.consume_one(query).await {
        Ok(outcome) => {
            observer.notify(ProbeEvent::Consumed {
                outcome: &outcome,
                matches_produced: matches_produced(&delivery, &outcome),
            });
            report.stage = ProbeStage::Consumed;
            report.consume = Some(outcome);
        }
        Err(error @ ProbeError::Consumer(_)) => {
            observer.notify(ProbeEvent::ConsumeFailed(&error));
            report.fail(error);
        }
        Err(error) => {
            observer.notify(ProbeEvent::Unexpected(&error));
            report.fail(error);
        }
    }

    report.delivery = Some(delivery);
    report
}
