pub mod admin;
pub mod broker_address;
pub mod commands;
pub mod connection_settings;
pub mod consumer;
pub mod error;
pub mod partition_offset;
pub mod probe;
pub mod producer;
pub mod queries;
