use crate::commands::produce_one::request::ProduceOneCommand;
use crate::commands::produce_one::response::DeliveryOutcome;
use crate::error::ProbeError;
use crate::partition_offset::PartitionOffset;
use crate::producer::ProducerWrapper;
use anyhow::{anyhow, Context};
use rdkafka::producer::{FutureRecord, Producer};
use tracing::{debug, warn};

#[tracing::instrument(skip_all, fields(topic = %command.topic))]
pub async fn produce_one(command: ProduceOneCommand) -> Result<DeliveryOutcome, ProbeError> {
    let producer = ProducerWrapper::create(&command.connection_settings, command.message_timeout)
        .context("While creating producer")
        .map_err(ProbeError::Unexpected)?;

    let outcome = await_delivery(&producer, &command).await;

    producer.close().await;

    outcome
}

async fn await_delivery(
    producer: &ProducerWrapper,
    command: &ProduceOneCommand,
) -> Result<DeliveryOutcome, ProbeError> {
    let record = FutureRecord::<(), [u8]>::to(&command.topic).payload(&command.payload);

    let delivery = producer
        .send_result(record)
        .map_err(|(error, _)| error)
        .context("While enqueueing message")
        .map_err(ProbeError::Unexpected)?;

    let outcome = match tokio::time::timeout(command.flush_timeout, delivery).await {
        Ok(Ok(Ok((partition, offset)))) => {
            debug!("Delivered to partition {partition} at offset {offset}");
            DeliveryOutcome::Delivered {
                topic: command.topic.clone(),
                partition_offset: PartitionOffset::new(partition, offset),
                payload: command.payload.clone(),
            }
        }
        Ok(Ok(Err((error, _message)))) => {
            warn!("Message delivery failed: {error}");
            DeliveryOutcome::Failed { error }
        }
        Ok(Err(_canceled)) => {
            return Err(ProbeError::Unexpected(anyhow!(
                "Delivery report was dropped before the message was acknowledged"
            )));
        }
        Err(_elapsed) => {
            let remaining = producer.in_flight_count();
            warn!(
                "Flush timed out after {:?} with {remaining} message(s) in flight",
                command.flush_timeout
            );
            DeliveryOutcome::Undelivered { remaining }
        }
    };

    Ok(outcome)
}
