//! Turns a list of application names into a complete [`EnvironmentSet`].
//!
//! Reads are fail-fast: the first failed resolution or read aborts the whole
//! fetch and no partial set is returned.

use std::collections::BTreeMap;

use futures_util::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use crate::partition::{EnvironmentMap, EnvironmentSet};
use crate::platform::{AppRef, CloudFoundryClient, PlatformError, PlatformResult};

pub struct EnvironmentFetcher<'a> {
    client: &'a CloudFoundryClient,
    space_guid: &'a str,
    concurrency: usize,
}

impl<'a> EnvironmentFetcher<'a> {
    pub fn new(client: &'a CloudFoundryClient, space_guid: &'a str, concurrency: usize) -> Self {
        Self {
            client,
            space_guid,
            concurrency: concurrency.max(1),
        }
    }

    /// Fetches the environment of every named application, or of every
    /// application in the space when `app_names` is empty.
    pub async fn fetch(&self, app_names: &[String]) -> PlatformResult<EnvironmentSet> {
        let apps = self.resolve(app_names).await?;
        info!("Reading environment of {} application(s)", apps.len());

        let environments: Vec<(String, EnvironmentMap)> = stream::iter(apps)
            .map(|app| async move {
                let env = self.client.app_environment(&app.guid).await?;
                debug!("{} defines {} variable(s)", app.name, env.len());
                Ok::<_, PlatformError>((app.name, env))
            })
            .buffer_unordered(self.concurrency)
            .try_collect()
            .await?;

        Ok(environments.into_iter().collect())
    }

    /// Resolves names one at a time, deduplicated by application GUID.
    async fn resolve(&self, app_names: &[String]) -> PlatformResult<Vec<AppRef>> {
        if app_names.is_empty() {
            return self.client.list_space_apps(self.space_guid).await;
        }

        let mut apps = BTreeMap::new();
        for name in app_names {
            let app = self.client.find_app(self.space_guid, name).await?;
            apps.insert(app.guid.clone(), app);
        }
        Ok(apps.into_values().collect())
    }
}
