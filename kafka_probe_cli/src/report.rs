use kafka_probe::broker_address::BrokerAddress;
use kafka_probe::commands::produce_one::DeliveryOutcome;
use kafka_probe::error::ProbeError;
use kafka_probe::probe::{ProbeEvent, ProbeObserver};
use kafka_probe::queries::check_metadata::ClusterMetadata;
use kafka_probe::queries::consume_one::ConsumeOutcome;
use std::fmt::Display;
use std::io::Write;
use tracing::warn;

const SEPARATOR: &str = "    ---------------------";

/// Renders probe events as emoji-tagged lines for a human reader.
pub struct ConsoleReport<W> {
    out: W,
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// `explicit` is false when the address was not given on the command line.
    pub fn bootstrap_chosen(&mut self, bootstrap: &[BrokerAddress], explicit: bool) {
        let bootstrap = BrokerAddress::join(bootstrap);
        if explicit {
            self.line(format_args!("\n🥾 bootstrap server: {bootstrap}"));
        } else {
            self.line(format_args!(
                "⚠️  No bootstrap server defined, defaulting to {bootstrap}\n"
            ));
        }
    }

    fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.out, "{text}") {
            warn!("Failed to write report line: {e}");
        }
    }

    fn metadata_checked(&mut self, bootstrap: &[BrokerAddress], metadata: &ClusterMetadata) {
        self.line(format_args!(
            "\n    ✅ Connected to bootstrap server({}) and it returned metadata for brokers as follows:\n",
            BrokerAddress::join(bootstrap)
        ));
        for broker in &metadata.brokers {
            self.line(format_args!("        [ID {}] {}", broker.id, broker.address()));
        }
        self.line(format_args!(
            "\n    Originating broker: [ID {}] {}",
            metadata.originating_broker.id, metadata.originating_broker.name
        ));
        if let Some(cluster_id) = &metadata.cluster_id {
            self.line(format_args!("    Cluster id: {cluster_id}"));
        }

        self.line(SEPARATOR);
        self.line("    ℹ️  This step just confirms that the bootstrap connection was successful.");
        self.line("    ℹ️  For the consumer to work your client will also need to be able to resolve the broker(s) returned");
        self.line("        in the metadata above.");
        self.line("    ℹ️  If the host(s) shown are not accessible from where your client is running you need to change");
        self.line("        your advertised.listeners configuration on the Kafka broker(s).");

        if !metadata.advertises_any(bootstrap) {
            self.line(format_args!(
                "\n    🛑 None of the advertised listeners on the cluster match the bootstrap server ({}) you're connecting to.",
                BrokerAddress::join(bootstrap)
            ));
            self.line("       Producing and consuming will likely fail unless the hosts above are reachable from here.");
        }
    }

    fn connection_failed(&mut self, bootstrap: &[BrokerAddress], error: &ProbeError) {
        let cause = match error {
            ProbeError::Connection { source, .. } => format!("{source:#}"),
            other => other.to_string(),
        };
        self.line("\n    ❌ Failed to connect to bootstrap server.\n");
        self.line(format_args!("    👉 {cause}\n"));
        self.line(format_args!(
            "    ℹ️  Check that Kafka is running, and that the bootstrap server you've provided ({}) is reachable from your client",
            BrokerAddress::join(bootstrap)
        ));
    }

    fn delivery(&mut self, outcome: &DeliveryOutcome) {
        match outcome {
            DeliveryOutcome::Delivered {
                topic,
                partition_offset,
                payload,
            } => self.line(format_args!(
                "✅  📬  Message delivered: \"{}\" to {} [partition {}]",
                String::from_utf8_lossy(payload),
                topic,
                partition_offset.partition()
            )),
            DeliveryOutcome::Failed { error } => {
                self.line(format_args!("❌ Message delivery failed: {error}"))
            }
            DeliveryOutcome::Undelivered { remaining } => self.line(format_args!(
                "❌ Message delivery failed ({remaining} message(s) still remain, did we timeout sending perhaps?)\n"
            )),
        }
    }

    fn consumed(&mut self, outcome: &ConsumeOutcome, matches_produced: Option<bool>) {
        match outcome {
            ConsumeOutcome::Received(message) => {
                self.line(format_args!(
                    "✅  💌  Message received:  \"{}\" from topic {}",
                    message.payload_text(),
                    message.topic
                ));
                match matches_produced {
                    Some(true) => self.line("✔️  That's the message produced above\n"),
                    Some(false) => self.line("ℹ️  That's not the message produced above\n"),
                    None => self.line(""),
                }
            }
            ConsumeOutcome::Empty => {
                self.line("❌ No message(s) consumed (maybe we timed out waiting?)");
                self.line("ℹ️  Check that the broker(s) listed in the metadata are reachable from here\n");
            }
        }
    }
}

impl<W: Write> ProbeObserver for ConsoleReport<W> {
    fn notify(&mut self, event: ProbeEvent<'_>) {
        match event {
            ProbeEvent::MetadataChecked {
                bootstrap,
                metadata,
            } => self.metadata_checked(bootstrap, metadata),
            ProbeEvent::ConnectionFailed { bootstrap, error } => {
                self.connection_failed(bootstrap, error)
            }
            ProbeEvent::Producing { topic, .. } => {
                self.line(format_args!("\n<Producing to {topic}>"))
            }
            ProbeEvent::Delivery(outcome) => self.delivery(outcome),
            ProbeEvent::Consuming { topic, group_id } => {
                self.line(format_args!("\n<Consuming from {topic} as group {group_id}>"))
            }
            ProbeEvent::Consumed {
                outcome,
                matches_produced,
            } => self.consumed(outcome, matches_produced),
            ProbeEvent::ConsumeFailed(error) => self.line(format_args!("❌ {error}\n")),
            ProbeEvent::Unexpected(error) => {
                self.line(format_args!("❌ Produce/consume failed unexpectedly: {error}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use kafka_probe::partition_offset::PartitionOffset;
    use kafka_probe::queries::check_metadata::{BrokerMetadata, OriginatingBroker};
    use kafka_probe::queries::consume_one::ConsumedMessage;

    fn render(events: impl FnOnce(&mut ConsoleReport<Vec<u8>>)) -> String {
        let mut report = ConsoleReport::new(Vec::new());
        events(&mut report);
        String::from_utf8(report.into_inner()).unwrap()
    }

    fn metadata(host: &str, port: u16) -> ClusterMetadata {
        ClusterMetadata {
            originating_broker: OriginatingBroker {
                id: 1,
                name: format!("{host}:{port}/1"),
            },
            brokers: vec![BrokerMetadata {
                id: 1,
                host: host.to_owned(),
                port,
            }],
            topics: vec![],
            cluster_id: Some("MkU3OEVBNTcwNTJENDM2Qg".to_owned()),
        }
    }

    #[test]
    fn lists_advertised_brokers() {
        let bootstrap = [BrokerAddress::new("localhost", 9092)];
        let metadata = metadata("localhost", 9092);

        let output = render(|report| {
            report.notify(ProbeEvent::MetadataChecked {
                bootstrap: &bootstrap,
                metadata: &metadata,
            })
        });

        assert!(output.contains("✅ Connected to bootstrap server(localhost:9092)"));
        assert!(output.contains("[ID 1] localhost:9092"));
        assert!(output.contains("Cluster id: MkU3OEVBNTcwNTJENDM2Qg"));
        assert!(!output.contains("🛑"));
    }

    #[test]
    fn warns_when_no_listener_matches_bootstrap() {
        let bootstrap = [BrokerAddress::new("localhost", 9092)];
        let metadata = metadata("kafka", 29092);

        let output = render(|report| {
            report.notify(ProbeEvent::MetadataChecked {
                bootstrap: &bootstrap,
                metadata: &metadata,
            })
        });

        assert!(output.contains("🛑 None of the advertised listeners"));
    }

    #[test]
    fn connection_failure_shows_cause_and_hint() {
        let bootstrap = [BrokerAddress::new("badhost", 9092)];
        let error = ProbeError::Connection {
            bootstrap: "badhost:9092".to_owned(),
            source: anyhow!("Meta data fetch error: BrokerTransportFailure"),
        };

        let output = render(|report| {
            report.notify(ProbeEvent::ConnectionFailed {
                bootstrap: &bootstrap,
                error: &error,
            })
        });

        assert!(output.contains("❌ Failed to connect to bootstrap server."));
        assert!(output.contains("👉 Meta data fetch error: BrokerTransportFailure"));
        assert!(output.contains("you've provided (badhost:9092)"));
    }

    #[test]
    fn renders_delivery_outcomes() {
        let delivered = DeliveryOutcome::Delivered {
            topic: "test_topic".to_owned(),
            partition_offset: PartitionOffset::new(0, 7),
            payload: b"foo / 2024-01-01 00:00:00".to_vec(),
        };
        let undelivered = DeliveryOutcome::Undelivered { remaining: 1 };

        let output = render(|report| {
            report.notify(ProbeEvent::Delivery(&delivered));
            report.notify(ProbeEvent::Delivery(&undelivered));
        });

        assert!(output.contains(
            "✅  📬  Message delivered: \"foo / 2024-01-01 00:00:00\" to test_topic [partition 0]"
        ));
        assert!(output.contains("❌ Message delivery failed (1 message(s) still remain"));
    }

    #[test]
    fn renders_consume_outcomes() {
        let received = ConsumeOutcome::Received(ConsumedMessage {
            topic: "test_topic".to_owned(),
            partition_offset: PartitionOffset::new(0, 7),
            payload: b"foo / 2024-01-01 00:00:00".to_vec(),
        });

        let output = render(|report| {
            report.notify(ProbeEvent::Consumed {
                outcome: &received,
                matches_produced: Some(true),
            });
            report.notify(ProbeEvent::Consumed {
                outcome: &ConsumeOutcome::Empty,
                matches_produced: None,
            });
        });

        assert!(output.contains(
            "✅  💌  Message received:  \"foo / 2024-01-01 00:00:00\" from topic test_topic"
        ));
        assert!(output.contains("✔️  That's the message produced above"));
        assert!(output.contains("❌ No message(s) consumed"));
        assert!(output.contains("listed in the metadata are reachable from here"));
    }

    #[test]
    fn default_bootstrap_is_announced_as_a_warning() {
        let output = render(|report| {
            report.bootstrap_chosen(&[BrokerAddress::default()], false)
        });

        assert_eq!(
            output,
            "⚠️  No bootstrap server defined, defaulting to localhost:9092\n\n"
        );
    }
}
