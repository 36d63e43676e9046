use serde::Deserialize;

use crate::partition::EnvironmentMap;

/// An application known to the platform.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AppRef {
    pub guid: String,
    pub name: String,
}

/// One page of a v2 list response.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub struct AppResource {
    pub metadata: AppMetadata,
    pub entity: AppEntity,
}

#[derive(Debug, Deserialize)]
pub struct AppMetadata {
    pub guid: String,
}

#[derive(Debug, Deserialize)]
pub struct AppEntity {
    pub name: String,
}

impl From<AppResource> for AppRef {
    fn from(resource: AppResource) -> Self {
        AppRef {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        }
    }
}

/// Body of `GET /v2/apps/{guid}/env`; only the user-provided variables are read.
#[derive(Debug, Deserialize)]
pub struct AppEnvResponse {
    #[serde(default)]
    pub environment_json: Option<EnvironmentMap>,
}

impl AppEnvResponse {
    pub fn into_environment(self) -> EnvironmentMap {
        self.environment_json.unwrap_or_default()
    }
}
