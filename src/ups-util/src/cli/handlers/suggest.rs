use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::fetcher::EnvironmentFetcher;
use crate::partition::Partition;
use crate::platform::{CloudFoundryClient, SessionProvider};
use crate::render::{render, service_definitions, OutputFormat};

/// Fetches every environment, partitions it and renders the statements.
///
/// Returns the full list of statements; nothing is returned when any read fails.
pub async fn suggest(
    app_names: &[String],
    format: OutputFormat,
    config: &Config,
    sessions: &dyn SessionProvider,
) -> Result<Vec<String>> {
    let session = sessions.session()?;
    let space_guid = session.require_space()?;
    let client = CloudFoundryClient::new(
        &session,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let environments = EnvironmentFetcher::new(&client, space_guid, config.fetch_concurrency)
        .fetch(app_names)
        .await
        .context("Failed to fetch application environments")?;

    let partition = Partition::compute(&environments);
    let services = service_definitions(&partition, &config.service_naming());
    info!(
        "{} application(s), {} shared variable(s), {} service(s) suggested",
        environments.len(),
        partition.shared().len(),
        services.len()
    );
    for app in partition.fully_shared_apps() {
        info!("{} is fully covered by the shared service", app);
    }

    render(&services, format)
}
