use crate::args::BootstrapServers;
use anyhow::Context;
use config::{Config, Source};
use kafka_probe::broker_address::{BrokerAddress, DEFAULT_BOOTSTRAP_SERVER};
use kafka_probe::connection_settings::ConnectionSettings;
use kafka_probe::consumer::{AutoOffsetReset, SecurityProtocol};
use kafka_probe::probe::{ProbeSettings, DEFAULT_TOPIC};
use serde::Deserialize;
use std::time::Duration;
use tracing::info;

#[derive(Deserialize, Debug)]
pub struct AppConfig {
    pub bootstrap_servers: String,
    pub topic: String,
    pub group_id: Option<String>,
    pub security_protocol: SecurityProtocol,
    pub auto_offset_reset: AutoOffsetReset,
    pub metadata_timeout_secs: u64,
    pub flush_timeout_secs: u64,
    pub consume_timeout_secs: u64,
    pub message_timeout_ms: u64,
}

impl AppConfig {
    /// Reads `probe.{toml,yaml,json,...}` if present, then `PROBE__*` variables.
    pub fn build() -> Result<Self, anyhow::Error> {
        Self::build_with(config::File::with_name("probe").required(false))
    }

    pub fn build_with<S>(file: S) -> Result<Self, anyhow::Error>
    where
        S: Source + Send + Sync + 'static,
    {
        let config = Config::builder()
            .set_default("bootstrap_servers", DEFAULT_BOOTSTRAP_SERVER)?
            .set_default("topic", DEFAULT_TOPIC)?
            .set_default("security_protocol", "plaintext")?
            .set_default("auto_offset_reset", "earliest")?
            .set_default("metadata_timeout_secs", 10)?
            .set_default("flush_timeout_secs", 5)?
            .set_default("consume_timeout_secs", 30)?
            .set_default("message_timeout_ms", 30_000)?
            .add_source(file)
            .add_source(config::Environment::with_prefix("PROBE").separator("__"))
            .build()
            .context("While building config")?;

        let deserialized_config = config
            .try_deserialize()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    /// `bootstrap` comes from the command line and wins over the configured list.
    pub fn into_settings(
        self,
        bootstrap: Option<BootstrapServers>,
    ) -> Result<ProbeSettings, anyhow::Error> {
        let brokers = match bootstrap {
            Some(BootstrapServers(brokers)) => brokers,
            None => BrokerAddress::parse_list(&self.bootstrap_servers)
                .context("While parsing configured bootstrap_servers")?,
        };

        Ok(ProbeSettings {
            connection_settings: ConnectionSettings {
                brokers,
                security_protocol: self.security_protocol,
            },
            topic: self.topic,
            group_id: self.group_id,
            auto_offset_reset: self.auto_offset_reset,
            metadata_timeout: Duration::from_secs(self.metadata_timeout_secs),
            flush_timeout: Duration::from_secs(self.flush_timeout_secs),
            consume_timeout: Duration::from_secs(self.consume_timeout_secs),
            message_timeout: Duration::from_millis(self.message_timeout_ms),
        })
    }
}
