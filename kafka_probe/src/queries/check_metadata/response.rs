use crate::broker_address::BrokerAddress;

#[derive(Debug, Clone)]
pub struct ClusterMetadata {
    pub originating_broker: OriginatingBroker,
    pub brokers: Vec<BrokerMetadata>,
    pub topics: Vec<KafkaTopicMetadata>,
    pub cluster_id: Option<String>,
}

/// The broker that answered the metadata request.
#[derive(Debug, Clone)]
pub struct OriginatingBroker {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerMetadata {
    pub id: i32,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct KafkaTopicMetadata {
    pub topic_name: String,
    pub partitions_count: usize,
}

impl ClusterMetadata {
    /// Whether `address` is one of the listeners the cluster advertises.
    pub fn advertises(&self, address: &BrokerAddress) -> bool {
        self.brokers
            .iter()
            .any(|broker| broker.host == address.host && broker.port == address.port)
    }

    pub fn advertises_any(&self, addresses: &[BrokerAddress]) -> bool {
        addresses.iter().any(|address| self.advertises(address))
    }
}

impl BrokerMetadata {
    pub fn address(&self) -> BrokerAddress {
        BrokerAddress::new(self.host.clone(), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata_with(brokers: Vec<BrokerMetadata>) -> ClusterMetadata {
        ClusterMetadata {
            originating_broker: OriginatingBroker {
                id: 1,
                name: "localhost:9092/1".to_owned(),
            },
            brokers,
            topics: vec![],
            cluster_id: None,
        }
    }

    #[test]
    fn matches_advertised_listener() {
        let metadata = metadata_with(vec![BrokerMetadata {
            id: 1,
            host: "localhost".to_owned(),
            port: 9092,
        }]);

        assert!(metadata.advertises(&BrokerAddress::new("localhost", 9092)));
        assert!(!metadata.advertises(&BrokerAddress::new("localhost", 19092)));
    }

    #[test]
    fn container_hostname_does_not_match_published_port() {
        let metadata = metadata_with(vec![BrokerMetadata {
            id: 1,
            host: "kafka".to_owned(),
            port: 29092,
        }]);

        let bootstrap = [
            BrokerAddress::new("localhost", 9092),
            BrokerAddress::new("127.0.0.1", 9092),
        ];

        assert!(!metadata.advertises_any(&bootstrap));
    }
}
