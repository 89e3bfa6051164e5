use getset::Getters;
use std::fmt::{Display, Formatter};

#[derive(Debug, Getters, Copy, Clone, PartialEq, Eq)]
#[getset(get = "pub")]
pub struct PartitionOffset {
    partition: i32,
    offset: i64,
}

impl PartitionOffset {
    pub fn new(partition: i32, offset: i64) -> PartitionOffset {
        Self { offset, partition }
    }
}

impl Display for PartitionOffset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "partition {} at offset {}", self.partition, self.offset)
    }
}
