use clap::Parser;
use kafka_probe::broker_address::BrokerAddress;

/// Checks that this machine can reach a Kafka cluster, produce to it and
/// consume from it.
#[derive(Parser, Debug)]
#[command(name = "probe", version)]
pub struct Args {
    /// Bootstrap server(s) as host:port[,host:port...]
    #[arg(value_parser = parse_bootstrap_servers)]
    pub bootstrap_server: Option<BootstrapServers>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapServers(pub Vec<BrokerAddress>);

fn parse_bootstrap_servers(value: &str) -> Result<BootstrapServers, String> {
    BrokerAddress::parse_list(value)
        .map(BootstrapServers)
        .map_err(|e| format!("{e:#}"))
}
