use std::time::Duration;

use anyhow::Context;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::error::{FetchError, PlatformResult, ResolutionError};
use super::session::Session;
use super::structs::{AppEnvResponse, AppRef, AppResource, Page};
use crate::constants::{APP_ENV_ENDPOINT, SPACE_APPS_ENDPOINT};
use crate::partition::EnvironmentMap;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Minimal Cloud Foundry v2 API client: authenticated `GET`s decoded from JSON.
pub struct CloudFoundryClient {
    base_uri: String,
    authorization: String,
    client: reqwest::Client,
}

impl CloudFoundryClient {
    pub fn new(session: &Session, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            base_uri: session.api_endpoint.clone(),
            authorization: session.authorization.clone(),
            client,
        })
    }

    fn get_url(&self, path: &str) -> Result<Url, FetchError> {
        Ok(Url::parse(&format!("{}{}", self.base_uri, path))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        if status != StatusCode::OK {
            let body = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            return Err(FetchError::status(url.as_str(), status.as_u16(), body));
        }

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// Every application in `space_guid`, following `next_url` until the last page.
    pub async fn list_space_apps(&self, space_guid: &str) -> PlatformResult<Vec<AppRef>> {
        let mut apps = Vec::new();
        let mut next = Some(SPACE_APPS_ENDPOINT.replace("{space}", space_guid));

        while let Some(path) = next {
            let page: Page<AppResource> = self.get_json(self.get_url(&path)?).await?;
            apps.extend(page.resources.into_iter().map(AppRef::from));
            next = page.next_url;
        }

        Ok(apps)
    }

    /// Looks up one application by name inside `space_guid`, following
    /// `next_url` until a page holds it. Any failed lookup request resolves to
    /// a [`ResolutionError`] carrying the request error.
    pub async fn find_app(&self, space_guid: &str, name: &str) -> PlatformResult<AppRef> {
        let lookup_failed = |err: FetchError| ResolutionError::lookup_failed(name, err);

        let mut url = self
            .get_url(&SPACE_APPS_ENDPOINT.replace("{space}", space_guid))
            .map_err(lookup_failed)?;
        url.query_pairs_mut()
            .append_pair("q", &format!("name:{}", name));

        let mut next = Some(url);
        while let Some(url) = next {
            let page: Page<AppResource> = self.get_json(url).await.map_err(lookup_failed)?;
            if let Some(app) = page
                .resources
                .into_iter()
                .map(AppRef::from)
                .find(|app| app.name == name)
            {
                return Ok(app);
            }
            next = page
                .next_url
                .map(|path| self.get_url(&path))
                .transpose()
                .map_err(lookup_failed)?;
        }

        Err(ResolutionError::not_found(name).into())
    }

    /// User-provided environment variables of one application.
    pub async fn app_environment(&self, app_guid: &str) -> PlatformResult<EnvironmentMap> {
        let url = self.get_url(&APP_ENV_ENDPOINT.replace("{app}", app_guid))?;
        let response: AppEnvResponse = self.get_json(url).await?;
        Ok(response.into_environment())
    }
}
