use crate::broker_address::BrokerAddress;
use crate::connection_settings::ConnectionSettings;
use crate::consumer::AutoOffsetReset;
use std::time::Duration;

pub const DEFAULT_TOPIC: &str = "test_topic";

/// Everything a probe run needs, built once at start up.
#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
    /// `None` means a fresh group per run.
    pub group_id: Option<String>,
    pub auto_offset_reset: AutoOffsetReset,
    pub metadata_timeout: Duration,
    pub flush_timeout: Duration,
    pub consume_timeout: Duration,
    pub message_timeout: Duration,
}

impl ProbeSettings {
    pub fn bootstrap(&self) -> &[BrokerAddress] {
        &self.connection_settings.brokers
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connection_settings: ConnectionSettings::default(),
            topic: DEFAULT_TOPIC.to_owned(),
            group_id: None,
            auto_offset_reset: AutoOffsetReset::Earliest,
            metadata_timeout: Duration::from_secs(10),
            flush_timeout: Duration::from_secs(5),
            consume_timeout: Duration::from_secs(30),
            message_timeout: Duration::from_secs(30),
        }
    }
}
