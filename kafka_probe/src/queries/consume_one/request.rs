use crate::connection_settings::ConnectionSettings;
use crate::consumer::AutoOffsetReset;
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ConsumeOneQuery {
    pub connection_settings: ConnectionSettings,
    pub topic: String,
    pub group_id: String,
    pub auto_offset_reset: AutoOffsetReset,
    pub timeout: Duration,
    /// When set, messages with any other payload are skipped until the timeout.
    pub expected_payload: Option<Vec<u8>>,
}

impl ConsumeOneQuery {
    pub(crate) fn accepts(&self, payload: &[u8]) -> bool {
        self.expected_payload
            .as_deref()
            .map_or(true, |expected| expected == payload)
    }
}

/// A consumer group id nobody has committed offsets for yet.
pub fn fresh_group_id() -> String {
    format!("kafka-probe-{}", Uuid::now_v7())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(expected_payload: Option<&[u8]>) -> ConsumeOneQuery {
        ConsumeOneQuery {
            connection_settings: ConnectionSettings::default(),
            topic: "test_topic".to_owned(),
            group_id: fresh_group_id(),
            auto_offset_reset: AutoOffsetReset::Earliest,
            timeout: Duration::from_secs(1),
            expected_payload: expected_payload.map(<[u8]>::to_vec),
        }
    }

    #[test]
    fn without_expected_payload_any_message_is_accepted() {
        let query = query(None);

        assert!(query.accepts(b"older message"));
        assert!(query.accepts(b""));
    }

    #[test]
    fn expected_payload_rejects_older_messages() {
        let query = query(Some(b"foo / 2024-01-01 00:00:01"));

        assert!(!query.accepts(b"foo / 2024-01-01 00:00:00"));
        assert!(query.accepts(b"foo / 2024-01-01 00:00:01"));
    }

    #[test]
    fn fresh_group_ids_are_unique() {
        let first = fresh_group_id();
        let second = fresh_group_id();

        assert!(first.starts_with("kafka-probe-"));
        assert_ne!(first, second);
    }
}
