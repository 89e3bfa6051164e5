use crate::broker_address::BrokerAddress;
use crate::consumer::SecurityProtocol;
use anyhow::bail;
use rdkafka::ClientConfig;

#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub brokers: Vec<BrokerAddress>,
    pub security_protocol: SecurityProtocol,
}

impl ConnectionSettings {
    pub fn bootstrap_servers(&self) -> String {
        BrokerAddress::join(&self.brokers)
    }
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        Self {
            brokers: vec![BrokerAddress::default()],
            security_protocol: SecurityProtocol::default(),
        }
    }
}

impl TryFrom<&ConnectionSettings> for ClientConfig {
    type Error = anyhow::Error;

    fn try_from(value: &ConnectionSettings) -> Result<Self, Self::Error> {
        if value.brokers.is_empty() {
            bail!("No brokers specified")
        }

        let mut config = ClientConfig::new();

        // https://raw.githubusercontent.com/confluentinc/librdkafka/master/CONFIGURATION.md
        config
            .set("bootstrap.servers", value.bootstrap_servers())
            .set("security.protocol", value.security_protocol.to_string());

        if let Ok(value) = std::env::var("RD_KAFKA_DEBUG") {
            config.set("debug", value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_client_config_from_settings() {
        let settings = ConnectionSettings {
            brokers: vec![
                BrokerAddress::new("kafka-1", 9092),
                BrokerAddress::new("kafka-2", 9093),
            ],
            security_protocol: SecurityProtocol::Ssl,
        };

        let config = ClientConfig::try_from(&settings).unwrap();

        assert_eq!(
            config.get("bootstrap.servers"),
            Some("kafka-1:9092,kafka-2:9093")
        );
        assert_eq!(config.get("security.protocol"), Some("ssl"));
    }

    #[test]
    fn empty_broker_list_is_rejected() {
        let settings = ConnectionSettings {
            brokers: vec![],
            security_protocol: SecurityProtocol::Plaintext,
        };

        assert!(ClientConfig::try_from(&settings).is_err());
    }
}
