//! # Orbital derivation pipeline
//!
//! Stateless batch entry point: filter a [`CometCatalog`] on an inclusive eccentricity range and
//! derive every quantity of the kept records.
//!
//! Each call takes all of its inputs explicitly and returns a fresh collection, so the
//! presentation layer can re-run it on every interaction. For a given catalog and range the
//! output is identical in values and order.
//!
//! ```rust
//! use neocomet::{catalog::CometCatalog, pipeline::{derive_all, EccentricityRange}};
//!
//! let catalog = CometCatalog::from_json_str(r#"[
//!     {"object": "2P/Encke", "e": "0.8483", "q_au_1": "0.336", "i_deg": "11.78",
//!      "w_deg": "186.5", "node_deg": "334.57", "p_yr": "3.3", "moid_au": "0.173",
//!      "epoch_tdb": "0"}
//! ]"#).unwrap();
//!
//! let range = EccentricityRange::new(0.0, 1.0).unwrap();
//! let derived = derive_all(&catalog, range).unwrap();
//! assert_eq!(derived.len(), 1);
//! ```
use itertools::{Itertools, MinMaxResult};
use tracing::debug;

use crate::{
    catalog::CometCatalog, neocomet_errors::NeoCometError,
    orbit_type::derived_element::DerivedOrbitalElements,
};

/// Inclusive eccentricity filter `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EccentricityRange {
    min: f64,
    max: f64,
}

impl EccentricityRange {
    /// Build a range.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::InvalidFilterRange` – when a bound is not finite or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, NeoCometError> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(NeoCometError::InvalidFilterRange { min, max });
        }
        Ok(EccentricityRange { min, max })
    }

    /// Smallest range containing every defined eccentricity of the catalog, `None` when no
    /// record has one. This is the default selection of the eccentricity slider.
    pub fn spanning(catalog: &CometCatalog) -> Option<Self> {
        match catalog.iter().filter_map(|r| r.eccentricity).minmax_by(f64::total_cmp) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(e) => Some(EccentricityRange { min: e, max: e }),
            MinMaxResult::MinMax(min, max) => Some(EccentricityRange { min, max }),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether a defined eccentricity lies in the range (bounds included).
    pub fn contains(&self, eccentricity: f64) -> bool {
        self.min <= eccentricity && eccentricity <= self.max
    }
}

/// Filter and derive a whole catalog batch.
///
/// Arguments
/// -----------------
/// * `catalog`: raw records and the columns observed by the loader.
/// * `filter`: inclusive eccentricity range; records with an undefined eccentricity or one
///   outside the range are dropped before derivation.
///
/// Return
/// ----------
/// * The derived records, in the input order.
///
/// Errors
/// ----------
/// * `NeoCometError::SchemaError` – when a required column is absent from the whole batch.
///   Individual unparsable cells never fail the call.
///
/// See also
/// ------------
/// * [`DerivedOrbitalElements::derive`] – Per-record derivation.
pub fn derive_all(
    catalog: &CometCatalog,
    filter: EccentricityRange,
) -> Result<Vec<DerivedOrbitalElements>, NeoCometError> {
    catalog.validate_schema()?;

    let derived: Vec<DerivedOrbitalElements> = catalog
        .iter()
        .filter(|raw| raw.eccentricity.is_some_and(|e| filter.contains(e)))
        .map(DerivedOrbitalElements::derive)
        .collect();

    debug!(
        kept = derived.len(),
        dropped = catalog.len() - derived.len(),
        min = filter.min,
        max = filter.max,
        "catalog derived"
    );
    Ok(derived)
}
