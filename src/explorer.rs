//! # CometExplorer: catalog retrieval and on-demand derivation
//!
//! This module defines [`CometExplorer`], the façade wiring together:
//!
//! 1. **Environment state** ([`ExplorerEnv`]) — HTTP client and configuration.
//! 2. **Catalog access** — the remote catalog is fetched on first use, then reused for the
//!   lifetime of the explorer (no invalidation).
//! 3. **Derivation** — [`derive_all`] re-run on every request with the caller's filter.
//! 4. **Orbit view** — sampled paths of a handful of selected comets.
//!
//! ## Typical usage
//!
//! ```rust,no_run
//! use neocomet::{env_state::ExplorerConfig, explorer::CometExplorer};
//!
//! # async fn run() -> Result<(), neocomet::neocomet_errors::NeoCometError> {
//! let explorer = CometExplorer::new(ExplorerConfig::default())?;
//!
//! // Fetched once, then cached
//! let derived = explorer.derive(None).await?;
//! let paths = explorer.orbit_paths(&derived, &["2P/Encke"])?;
//! println!("{} comets, {} paths", derived.len(), paths.len());
//! # Ok(())
//! # }
//! ```
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::{
    catalog::CometCatalog,
    env_state::{ExplorerConfig, ExplorerEnv},
    neocomet_errors::NeoCometError,
    orbit_path::{compute_orbit_path, OrbitPath},
    orbit_type::derived_element::DerivedOrbitalElements,
    pipeline::{derive_all, EccentricityRange},
};

#[derive(Debug)]
pub struct CometExplorer {
    env_state: ExplorerEnv,
    catalog: OnceCell<CometCatalog>,
}

impl CometExplorer {
    /// Construct a new explorer; nothing is fetched until the catalog is first needed.
    pub fn new(config: ExplorerConfig) -> Result<Self, NeoCometError> {
        Ok(CometExplorer {
            env_state: ExplorerEnv::new(config)?,
            catalog: OnceCell::new(),
        })
    }

    /// Construct an explorer over an already loaded catalog (offline use).
    pub fn with_catalog(
        config: ExplorerConfig,
        catalog: CometCatalog,
    ) -> Result<Self, NeoCometError> {
        Ok(CometExplorer {
            env_state: ExplorerEnv::new(config)?,
            catalog: OnceCell::new_with(Some(catalog)),
        })
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.env_state.config
    }

    /// Fetch and parse the remote catalog (always hits the network).
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::FetchFailed` / `HttpError` – retrieval failed.
    /// * `NeoCometError::JsonError` – the answer is not a JSON array of objects.
    pub async fn load_catalog(&self) -> Result<CometCatalog, NeoCometError> {
        let payload = self
            .env_state
            .get_from_url(&self.env_state.config.dataset_url)
            .await?;
        let catalog = CometCatalog::from_json_str(&payload)?;
        info!(records = catalog.len(), "comet catalog retrieved");
        Ok(catalog)
    }

    /// The catalog, fetched on first call and reused afterwards.
    ///
    /// A failed fetch is not cached: the next call tries again.
    pub async fn catalog(&self) -> Result<&CometCatalog, NeoCometError> {
        self.catalog.get_or_try_init(|| self.load_catalog()).await
    }

    /// Derive the catalog restricted to an eccentricity range.
    ///
    /// Arguments
    /// -----------------
    /// * `filter`: inclusive eccentricity range, `None` for the full span of the catalog.
    ///
    /// Return
    /// ----------
    /// * The derived records in catalog order; empty when the catalog is empty.
    pub async fn derive(
        &self,
        filter: Option<EccentricityRange>,
    ) -> Result<Vec<DerivedOrbitalElements>, NeoCometError> {
        let catalog = self.catalog().await?;
        match filter.or_else(|| EccentricityRange::spanning(catalog)) {
            Some(range) => derive_all(catalog, range),
            None => {
                catalog.validate_schema()?;
                Ok(Vec::new())
            }
        }
    }

    /// Sampled orbits of the selected comets, in selection order.
    ///
    /// At most `max_orbit_selections` comets are drawn; extra selections are ignored.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::UnknownDesignation` – a selection is not in `derived`.
    /// * `NeoCometError::InvalidOrbitGeometry` – a selected comet is not on a bound orbit.
    pub fn orbit_paths(
        &self,
        derived: &[DerivedOrbitalElements],
        designations: &[&str],
    ) -> Result<Vec<(String, OrbitPath)>, NeoCometError> {
        let config = &self.env_state.config;
        if designations.len() > config.max_orbit_selections {
            warn!(
                selected = designations.len(),
                max = config.max_orbit_selections,
                "too many comets selected for the orbit view, extra selections ignored"
            );
        }

        designations
            .iter()
            .take(config.max_orbit_selections)
            .map(|name| {
                let elements = derived
                    .iter()
                    .find(|d| d.raw.designation == *name)
                    .ok_or_else(|| NeoCometError::UnknownDesignation(name.to_string()))?;
                let path = compute_orbit_path(elements, config.orbit_sample_count)?;
                Ok((name.to_string(), path))
            })
            .collect()
    }
}
