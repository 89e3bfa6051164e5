use crate::connection_settings::ConnectionSettings;
use anyhow::Context;
use rdkafka::producer::FutureProducer;
use rdkafka::ClientConfig;
use std::ops::{Deref, DerefMut};
use std::time::Duration;
use tracing::{debug, warn};

pub struct ProducerWrapper {
    producer: FutureProducer,
}

impl ProducerWrapper {
    pub fn create(
        connection_settings: &ConnectionSettings,
        message_timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let mut config = ClientConfig::try_from(connection_settings)?;
        let producer: FutureProducer = config
            .set("message.timeout.ms", message_timeout.as_millis().to_string())
            .set("linger.ms", "0")
            .create()
            .context("While creating a kafka FutureProducer")?;

        Ok(Self { producer })
    }

    /// Destroying a producer waits on librdkafka's own teardown.
    pub async fn close(self) {
        match tokio::task::spawn_blocking(move || drop(self)).await {
            Ok(()) => debug!("Producer closed"),
            Err(e) => warn!("Producer close task failed: {e}"),
        }
    }
}

impl DerefMut for ProducerWrapper {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.producer
    }
}

impl Deref for ProducerWrapper {
    type Target = FutureProducer;

    fn deref(&self) -> &Self::Target {
        &self.producer
    }
}
