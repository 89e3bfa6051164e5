use crate::connection_settings::ConnectionSettings;
use crate::consumer::AutoOffsetReset;
use anyhow::Context;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::ClientConfig;
use std::ops::{Deref, DerefMut};
use tracing::{debug, warn};

pub struct ConsumerWrapper {
    consumer: StreamConsumer,
}

impl ConsumerWrapper {
    pub fn create_for_consuming(
        connection_settings: &ConnectionSettings,
        group: &str,
        auto_offset_reset: AutoOffsetReset,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(connection_settings)?;

        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        let consumer: StreamConsumer = config
            .set("group.id", group)
            .set("auto.offset.reset", auto_offset_reset.to_string())
            .set("enable.partition.eof", "false")
            .set("session.timeout.ms", "10000")
            .set("enable.auto.commit", "true")
            .set("heartbeat.interval.ms", "1000")
            .create()
            .context("While creating kafka StreamConsumer")?;

        Ok(Self { consumer })
    }

    /// Leaves the group and destroys the client off the async workers,
    /// since librdkafka blocks until the group leave completes.
    pub async fn close(self) {
        let closing = tokio::task::spawn_blocking(move || {
            self.consumer.unsubscribe();
            drop(self);
        });

        match closing.await {
            Ok(()) => debug!("Consumer closed"),
            Err(e) => warn!("Consumer close task failed: {e}"),
        }
    }
}

impl DerefMut for ConsumerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.consumer
    }
}

impl Deref for ConsumerWrapper {
    type Target = StreamConsumer;

    fn deref(&self) -> &Self::Target {
        &self.consumer
    }
}
