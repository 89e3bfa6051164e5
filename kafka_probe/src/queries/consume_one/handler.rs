use crate::consumer::ConsumerWrapper;
use crate::error::ProbeError;
use crate::queries::consume_one::request::ConsumeOneQuery;
use crate::queries::consume_one::response::{ConsumeOutcome, ConsumedMessage};
use anyhow::Context;
use rdkafka::consumer::Consumer;
use rdkafka::error::{KafkaError, RDKafkaErrorCode};
use rdkafka::Message;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

#[tracing::instrument(skip_all, fields(topic = %query.topic, group = %query.group_id))]
pub async fn consume_one(query: ConsumeOneQuery) -> Result<ConsumeOutcome, ProbeError> {
    let consumer = ConsumerWrapper::create_for_consuming(
        &query.connection_settings,
        &query.group_id,
        query.auto_offset_reset,
    )
    .context("While creating consumer")
    .map_err(ProbeError::Consumer)?;

    let outcome = receive_one(&consumer, &query).await;

    consumer.close().await;

    outcome.map_err(ProbeError::Consumer)
}

async fn receive_one(
    consumer: &ConsumerWrapper,
    query: &ConsumeOneQuery,
) -> Result<ConsumeOutcome, anyhow::Error> {
    consumer
        .subscribe(&[&query.topic])
        .context("While subscribing to topic")?;

    let deadline = Instant::now() + query.timeout;

    loop {
        let Ok(received) = tokio::time::timeout_at(deadline, consumer.recv()).await else {
            info!("No message received within {:?}", query.timeout);
            return Ok(ConsumeOutcome::Empty);
        };

        let message = match received {
            Ok(message) => message,
            Err(e) if is_retryable(&e) => {
                warn!("Retrying after transient consumer error: {e}");
                continue;
            }
            Err(e) => return Err(e).context("While receiving message"),
        };

        trace!(
            "New message. Topic: '{}', partition: {}, offset: {}",
            message.topic(),
            message.partition(),
            message.offset(),
        );

        if !query.accepts(message.payload().unwrap_or_default()) {
            debug!(
                "Skipping message at partition {} offset {}, payload differs from the expected one",
                message.partition(),
                message.offset(),
            );
            continue;
        }

        return Ok(ConsumeOutcome::Received(ConsumedMessage::from(&message)));
    }
}

/// Errors librdkafka recovers from on its own once brokers become reachable
/// or the topic gets auto-created.
fn is_retryable(error: &KafkaError) -> bool {
    matches!(
        error.rdkafka_error_code(),
        Some(
            RDKafkaErrorCode::BrokerTransportFailure
                | RDKafkaErrorCode::AllBrokersDown
                | RDKafkaErrorCode::Resolve
                | RDKafkaErrorCode::OperationTimedOut
                | RDKafkaErrorCode::UnknownTopicOrPartition
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_failures_are_retried() {
        let dropped = KafkaError::MessageConsumption(RDKafkaErrorCode::BrokerTransportFailure);
        let all_down = KafkaError::MessageConsumption(RDKafkaErrorCode::AllBrokersDown);
        let no_topic = KafkaError::MessageConsumption(RDKafkaErrorCode::UnknownTopicOrPartition);

        assert!(is_retryable(&dropped));
        assert!(is_retryable(&all_down));
        assert!(is_retryable(&no_topic));
    }

    #[test]
    fn other_errors_end_the_receive() {
        let denied = KafkaError::MessageConsumption(RDKafkaErrorCode::TopicAuthorizationFailed);
        let subscription = KafkaError::Subscription("test_topic".to_owned());

        assert!(!is_retryable(&denied));
        assert!(!is_retryable(&subscription));
    }
}
