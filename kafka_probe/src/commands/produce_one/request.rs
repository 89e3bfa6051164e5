use crate::connection_settings::ConnectionSettings;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ProduceOneCommand {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
    pub payload: Vec<u8>,
    /// How long to wait for the delivery report.
    pub flush_timeout: Duration,
    /// librdkafka `message.timeout.ms`.
    pub message_timeout: Duration,
}

/// Builds the timestamped probe payload, e.g. `foo / 2024-01-01 00:00:00`.
pub fn probe_payload<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("foo / {}", now.format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn payload_contains_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        assert_eq!(probe_payload(&now), "foo / 2024-01-01 00:00:00");
    }
}
