use crate::partition_offset::PartitionOffset;
use rdkafka::error::KafkaError;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryOutcome {
    Delivered {
        topic: String,
        partition_offset: PartitionOffset,
        payload: Vec<u8>,
    },
    Failed {
        error: KafkaError,
    },
    /// The flush timeout elapsed with `remaining` messages still queued.
    Undelivered {
        remaining: i32,
    },
}

impl DeliveryOutcome {
    pub fn delivered_payload(&self) -> Option<&[u8]> {
        match self {
            DeliveryOutcome::Delivered { payload, .. } => Some(payload),
            _ => None,
        }
    }

    pub fn delivered_text(&self) -> Option<Cow<'_, str>> {
        self.delivered_payload().map(String::from_utf8_lossy)
    }
}
