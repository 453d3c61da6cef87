//! # Explorer environment state
//!
//! This module defines [`ExplorerEnv`], the **shared environment object** of the crate: the
//! configuration ([`ExplorerConfig`]) and a persistent asynchronous HTTP client used to retrieve
//! the comet catalog.
//!
//! ## Structure
//!
//! ```text
//! ExplorerEnv
//! ├── http_client  (reqwest::Client, global timeout from the config)
//! └── config       (ExplorerConfig)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use neocomet::env_state::{ExplorerConfig, ExplorerEnv};
//!
//! # async fn run() -> Result<(), neocomet::neocomet_errors::NeoCometError> {
//! let env = ExplorerEnv::new(ExplorerConfig::default())?;
//! let payload = env.get_from_url(&env.config.dataset_url).await?;
//! println!("{} bytes", payload.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Notes
//!
//! - A fetch failure (transport error or non-success status) is reported as an error, while an
//!   empty dataset is a successful empty response: callers can tell "no data" from "no answer".
//! - No retry is attempted; the caller decides whether to try again.
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{constants::NASA_COMET_DATASET_URL, neocomet_errors::NeoCometError};

/// Configuration of the explorer.
///
/// Every field has a default, so a partial JSON document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Location of the catalog JSON export.
    pub dataset_url: String,

    /// Global timeout of a catalog request, in seconds.
    pub request_timeout: u64,

    /// Number of points of each sampled orbit path.
    pub orbit_sample_count: usize,

    /// Maximum number of comets drawn together in the 3D orbit view.
    pub max_orbit_selections: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            dataset_url: NASA_COMET_DATASET_URL.to_string(),
            request_timeout: 30,
            orbit_sample_count: 1000,
            max_orbit_selections: 5,
        }
    }
}

impl ExplorerConfig {
    /// Read a configuration from a JSON document, missing fields taking their default value.
    pub fn from_json_str(document: &str) -> Result<Self, NeoCometError> {
        Ok(serde_json::from_str(document)?)
    }
}

/// This object is passed to the loader to provide access to the HTTP client and settings.
#[derive(Debug, Clone)]
pub struct ExplorerEnv {
    pub http_client: Client,
    pub config: ExplorerConfig,
}

impl ExplorerEnv {
    /// Create the environment and its HTTP client.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::HttpError` – when the HTTP client cannot be built (TLS backend failure).
    pub fn new(config: ExplorerConfig) -> Result<Self, NeoCometError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()?;

        Ok(ExplorerEnv {
            http_client,
            config,
        })
    }

    /// GET a resource and return its body as text.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::FetchFailed` – when the server answers with a non-success status.
    /// * `NeoCometError::HttpError` – on transport failure or timeout.
    pub async fn get_from_url(&self, url: &str) -> Result<String, NeoCometError> {
        debug!(url, "requesting");
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "request failed");
            return Err(NeoCometError::FetchFailed {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
