use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
#[cfg(test)]
use mockall::automock;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::constants::{CF_CONFIG_DIR, CF_CONFIG_FILE};

/// Authenticated view of the platform for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// API base address, ie "https://api.system.example.com"
    pub api_endpoint: String,
    /// Authorization header, ie "bearer eyXXXXX"
    pub authorization: String,
    /// Currently targeted space, needed to list or resolve applications
    pub space_guid: Option<String>,
}

impl Session {
    pub fn require_space(&self) -> Result<&str> {
        self.space_guid.as_deref().ok_or_else(|| {
            anyhow!("No space targeted. Run `cf target -s <space>` or set UPS_UTIL_SPACE_GUID")
        })
    }
}

#[cfg_attr(test, automock)]
pub trait SessionProvider {
    fn session(&self) -> Result<Session>;
}

/// Subset of the CF CLI `config.json` this tool reads.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CfConfigFile {
    #[serde(default)]
    target: Option<String>,
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    space_fields: Option<CfSpaceFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct CfSpaceFields {
    #[serde(rename = "GUID", default)]
    guid: Option<String>,
}

/// Session from the CF CLI session file, with configured values taking precedence.
pub struct CfSessionProvider {
    cf_home: Option<PathBuf>,
    api_endpoint: Option<String>,
    access_token: Option<String>,
    space_guid: Option<String>,
}

impl CfSessionProvider {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cf_home: config.cf_home.clone(),
            api_endpoint: config.api_endpoint.clone(),
            access_token: config.access_token.clone(),
            space_guid: config.space_guid.clone(),
        }
    }

    fn config_file_path(&self) -> Option<PathBuf> {
        self.cf_home
            .as_ref()
            .map(|home| home.join(CF_CONFIG_DIR).join(CF_CONFIG_FILE))
    }

    fn fully_configured(&self) -> bool {
        self.api_endpoint.is_some() && self.access_token.is_some() && self.space_guid.is_some()
    }

    fn read_config_file(path: &Path) -> Result<CfConfigFile> {
        if !path.exists() {
            debug!("CF session file {} does not exist", path.display());
            return Ok(CfConfigFile::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CF session file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse CF session file {}", path.display()))
    }
}

impl SessionProvider for CfSessionProvider {
    fn session(&self) -> Result<Session> {
        let file = match (self.fully_configured(), self.config_file_path()) {
            (false, Some(path)) => Self::read_config_file(&path)?,
            _ => CfConfigFile::default(),
        };

        let api_endpoint = self
            .api_endpoint
            .clone()
            .or(file.target)
            .filter(|target| !target.is_empty())
            .ok_or_else(|| anyhow!("No API endpoint set. Run `cf login` or set UPS_UTIL_API_ENDPOINT"))?;

        let authorization = self
            .access_token
            .clone()
            .or(file.access_token)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| anyhow!("Not logged in. Run `cf login` or set UPS_UTIL_ACCESS_TOKEN"))?;

        let space_guid = self
            .space_guid
            .clone()
            .or(file.space_fields.and_then(|space| space.guid))
            .filter(|guid| !guid.is_empty());

        Ok(Session {
            api_endpoint: api_endpoint.trim_end_matches('/').to_string(),
            authorization,
            space_guid,
        })
    }
}
