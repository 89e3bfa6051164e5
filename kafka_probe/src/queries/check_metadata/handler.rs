use crate::admin::AdminWrapper;
use crate::error::ProbeError;
use crate::queries::check_metadata::request::CheckMetadataQuery;
use crate::queries::check_metadata::response::{
    BrokerMetadata, ClusterMetadata, KafkaTopicMetadata, OriginatingBroker,
};
use anyhow::{bail, Context};
use tracing::{debug, info};

#[tracing::instrument(skip_all, fields(bootstrap = %query.connection_settings.bootstrap_servers()))]
pub async fn check_metadata(query: CheckMetadataQuery) -> Result<ClusterMetadata, ProbeError> {
    let bootstrap = query.connection_settings.bootstrap_servers();

    let handle = tokio::task::spawn_blocking(move || fetch_cluster_metadata(&query));

    let metadata = handle
        .await
        .context("While joining blocking handle")
        .map_err(ProbeError::Unexpected)?
        .map_err(|source| ProbeError::Connection { bootstrap, source })?;

    info!(
        "Fetched metadata for {} broker(s) and {} topic(s)",
        metadata.brokers.len(),
        metadata.topics.len()
    );

    Ok(metadata)
}

fn fetch_cluster_metadata(query: &CheckMetadataQuery) -> Result<ClusterMetadata, anyhow::Error> {
    let admin = AdminWrapper::create(&query.connection_settings)
        .context("While creating admin client")?;

    let metadata = admin
        .inner()
        .fetch_metadata(None, query.timeout)
        .context("While fetching metadata")?;

    if metadata.brokers().is_empty() {
        bail!("Cluster returned metadata without any brokers")
    }

    let brokers = metadata
        .brokers()
        .iter()
        .map(|broker| BrokerMetadata {
            id: broker.id(),
            host: broker.host().to_owned(),
            port: broker.port() as u16,
        })
        .collect::<Vec<_>>();

    let topics = metadata
        .topics()
        .iter()
        .map(|topic| KafkaTopicMetadata {
            topic_name: topic.name().to_owned(),
            partitions_count: topic.partitions().len(),
        })
        .collect::<Vec<_>>();

    let originating_broker = OriginatingBroker {
        id: metadata.orig_broker_id(),
        name: metadata.orig_broker_name().to_owned(),
    };

    let cluster_id = admin.inner().fetch_cluster_id(query.timeout);
    debug!("Cluster id: {:?}", cluster_id);

    Ok(ClusterMetadata {
        originating_broker,
        brokers,
        topics,
        cluster_id,
    })
}
