//! Client for the OSRS hiscores service.

pub mod parse;

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::settings;
use crate::stats::types::MetricSet;

#[derive(Debug, Error)]
pub enum HiscoresError {
    #[error("player not listed on the hiscores")]
    UnknownPlayer,
    #[error("hiscores request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed hiscores payload: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone)]
pub struct HiscoresClient {
    http: reqwest::Client,
    base_url: String,
}

impl HiscoresClient {
    pub fn from_settings() -> Self {
        Self::new(
            &settings().hiscores_url,
            Duration::from_secs(settings().upstream_timeout),
        )
    }

    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("hiscores http client");
        HiscoresClient {
            http,
            base_url: base_url.to_string(),
        }
    }

    /// Fetch the player's current metrics.
    ///
    /// A 404 means the hiscores do not know the username. Network
    /// errors, request timeout, and other failure statuses surface as
    /// [`HiscoresError::Http`]; unparseable bodies as
    /// [`HiscoresError::Malformed`].
    pub async fn fetch(&self, username: &str) -> Result<MetricSet, HiscoresError> {
        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("player", username)])
            .send()
            .await?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(HiscoresError::UnknownPlayer);
        }

        let body = resp.error_for_status()?.text().await?;
        parse::parse_hiscores(&body)
    }
}
