use crate::partition_offset::PartitionOffset;
use rdkafka::message::BorrowedMessage;
use rdkafka::Message;
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsumeOutcome {
    Received(ConsumedMessage),
    /// Nothing arrived before the timeout.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumedMessage {
    pub topic: String,
    pub partition_offset: PartitionOffset,
    pub payload: Vec<u8>,
}

impl ConsumedMessage {
    pub fn payload_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

impl From<&BorrowedMessage<'_>> for ConsumedMessage {
    fn from(message: &BorrowedMessage<'_>) -> Self {
        Self {
            topic: message.topic().to_owned(),
            partition_offset: PartitionOffset::new(message.partition(), message.offset()),
            payload: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
        }
    }
}
