use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use config::{Config as RConfig, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    CONFIG_ENV_PREFIX, FETCH_CONCURRENCY, LOG_LEVEL, REQUEST_TIMEOUT_SECS, SERVICE_NAME_PREFIX,
    SHARED_SERVICE_NAME,
};
use crate::render::ServiceNaming;
use crate::utils::env::default_cf_home;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_endpoint: Option<String>,
    pub access_token: Option<String>,
    pub space_guid: Option<String>,
    pub cf_home: Option<PathBuf>,

    pub shared_service_name: String,
    pub service_name_prefix: String,

    pub request_timeout_secs: u64,
    pub fetch_concurrency: usize,

    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn service_naming(&self) -> ServiceNaming {
        ServiceNaming {
            shared: self.shared_service_name.clone(),
            prefix: self.service_name_prefix.clone(),
        }
    }

    /// Config as JSON with the access token masked, for debug logs.
    pub fn to_safe_json(&self) -> serde_json::Value {
        let mut json = serde_json::to_value(self).unwrap_or_default();
        if self.access_token.is_some() {
            json["access_token"] = serde_json::Value::String("***".to_string());
        }
        json
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the optional TOML file, then `UPS_UTIL_*` environment variables.
    pub fn load(config_file: Option<&Path>) -> Result<Config> {
        let mut builder = RConfig::builder();

        // set defaults
        builder = builder
            .set_default("shared_service_name", SHARED_SERVICE_NAME)?
            .set_default("service_name_prefix", SERVICE_NAME_PREFIX)?
            .set_default("request_timeout_secs", REQUEST_TIMEOUT_SECS)?
            .set_default("fetch_concurrency", FETCH_CONCURRENCY as u64)?
            .set_default("log_level", LOG_LEVEL)?;

        if let Some(cf_home) = default_cf_home() {
            builder = builder.set_default("cf_home", cf_home.to_string_lossy().to_string())?;
        }

        if let Some(path) = config_file {
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(Environment::with_prefix(CONFIG_ENV_PREFIX));

        let config: Config = builder
            .build()
            .context("failed to load configuration")?
            .try_deserialize()
            .context("failed to parse configuration")?;

        config.validate()?;
        Ok(config)
    }
}

impl Config {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.fetch_concurrency == 0 {
            bail!("fetch_concurrency must be at least 1");
        }
        if self.request_timeout_secs == 0 {
            bail!("request_timeout_secs must be at least 1");
        }
        Ok(())
    }
}
