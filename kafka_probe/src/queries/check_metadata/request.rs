use crate::connection_settings::ConnectionSettings;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CheckMetadataQuery {
    pub connection_settings: ConnectionSettings,
    pub timeout: Duration,
}
