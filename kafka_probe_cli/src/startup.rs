use crate::app_config::AppConfig;
use crate::args::Args;
use crate::report::ConsoleReport;
use anyhow::Context;
use kafka_probe::probe::{run_probe, KafkaProbeClient, ProbeReport};
use tracing::info;

/// Loads configuration, then runs the probe with a console report on stdout.
pub async fn run_probe_to_stdout(args: Args) -> Result<ProbeReport, anyhow::Error> {
    let config = AppConfig::build().context("While building app config")?;

    let explicit_bootstrap = args.bootstrap_server.is_some();
    let settings = config
        .into_settings(args.bootstrap_server)
        .context("While building probe settings")?;

    let mut console = ConsoleReport::new(std::io::stdout());
    console.bootstrap_chosen(settings.bootstrap(), explicit_bootstrap);

    let report = run_probe(&KafkaProbeClient, &settings, &mut console).await;
    info!("Probe finished at stage {:?}", report.stage);

    Ok(report)
}
