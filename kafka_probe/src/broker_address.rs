use anyhow::{bail, Context};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const DEFAULT_BOOTSTRAP_SERVER: &str = "localhost:9092";

/// A single `host:port` bootstrap endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerAddress {
    pub host: String,
    pub port: u16,
}

impl BrokerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Parses a comma separated `bootstrap.servers` list.
    pub fn parse_list(value: &str) -> Result<Vec<BrokerAddress>, anyhow::Error> {
        let addresses = value
            .split(',')
            .map(str::trim)
            .filter(|x| !x.is_empty())
            .map(BrokerAddress::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if addresses.is_empty() {
            bail!("No brokers specified")
        }

        Ok(addresses)
    }

    pub fn join(addresses: &[BrokerAddress]) -> String {
        addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for BrokerAddress {
    fn default() -> Self {
        Self::new("localhost", 9092)
    }
}

impl FromStr for BrokerAddress {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((host, port)) = s.trim().rsplit_once(':') else {
            bail!("'{s}' doesn't look like a host:port")
        };

        if host.is_empty() {
            bail!("'{s}' has an empty host")
        }

        let port = port
            .parse::<u16>()
            .with_context(|| format!("'{port}' is not a valid port number"))?;

        if port == 0 {
            bail!("Port 0 is not a valid broker port")
        }

        Ok(Self::new(host, port))
    }
}

impl Display for BrokerAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}
