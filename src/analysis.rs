//! # Presentation aggregates
//!
//! Pure summaries of a derived catalog, computed for the dashboard charts: the renderer only
//! draws what these functions return.
//!
//! ## Overview
//!
//! | Chart                               | Function                                   |
//! |-------------------------------------|--------------------------------------------|
//! | Eccentricity / size histograms      | [`histogram`] over [`OrbitColumn::values`] |
//! | Orbital period histogram (log axis) | [`valid_periods`] + [`histogram`]          |
//! | Inclination box plot                | [`BoxStats::from_values`]                  |
//! | Discovery rate                      | [`discovery_counts`]                       |
//! | Family pie chart                    | [`family_counts`]                          |
//! | Family distribution over time       | [`family_timeline`]                        |
//! | Correlation heatmap                 | [`correlation_matrix`]                     |
//! | Counters under the detail panel     | [`CatalogSummary::from_derived`]           |
//!
//! Undefined values are skipped, never replaced by zero.
use std::collections::BTreeMap;

use itertools::{Itertools, MinMaxResult};

use crate::{
    orbit_type::{derived_element::DerivedOrbitalElements, family::CometFamily},
    pipeline::EccentricityRange,
};

/// Number of bins of the eccentricity histogram.
pub const ECCENTRICITY_BINS: usize = 20;

/// Number of bins of the orbital period histogram.
pub const PERIOD_BINS: usize = 30;

/// Number of bins of the estimated size histogram.
pub const DIAMETER_BINS: usize = 30;

/// Numeric column of a derived record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrbitColumn {
    Eccentricity,
    PerihelionDistance,
    Inclination,
    OrbitalPeriod,
    Moid,
    SemiMajorAxis,
    Tisserand,
    EstimatedDiameter,
    OrbitalEnergy,
}

impl OrbitColumn {
    /// Columns of the correlation heatmap, in display order.
    pub const CORRELATION: [OrbitColumn; 7] = [
        OrbitColumn::Eccentricity,
        OrbitColumn::PerihelionDistance,
        OrbitColumn::Inclination,
        OrbitColumn::OrbitalPeriod,
        OrbitColumn::Moid,
        OrbitColumn::SemiMajorAxis,
        OrbitColumn::Tisserand,
    ];

    /// Name of the column in the tabular export.
    pub fn name(&self) -> &'static str {
        match self {
            OrbitColumn::Eccentricity => "e",
            OrbitColumn::PerihelionDistance => "q_au_1",
            OrbitColumn::Inclination => "i_deg",
            OrbitColumn::OrbitalPeriod => "p_yr",
            OrbitColumn::Moid => "moid_au",
            OrbitColumn::SemiMajorAxis => "a_au",
            OrbitColumn::Tisserand => "tisserand",
            OrbitColumn::EstimatedDiameter => "estimated_diameter_km",
            OrbitColumn::OrbitalEnergy => "orbital_energy_j_kg",
        }
    }

    /// Value of this column for one record.
    pub fn get(&self, d: &DerivedOrbitalElements) -> Option<f64> {
        match self {
            OrbitColumn::Eccentricity => d.raw.eccentricity,
            OrbitColumn::PerihelionDistance => d.raw.perihelion_distance,
            OrbitColumn::Inclination => d.raw.inclination,
            OrbitColumn::OrbitalPeriod => d.raw.orbital_period,
            OrbitColumn::Moid => d.raw.moid,
            OrbitColumn::SemiMajorAxis => d.semi_major_axis,
            OrbitColumn::Tisserand => d.tisserand_parameter,
            OrbitColumn::EstimatedDiameter => d.estimated_diameter,
            OrbitColumn::OrbitalEnergy => d.specific_orbital_energy,
        }
    }

    /// Defined values of this column, in record order.
    pub fn values(&self, derived: &[DerivedOrbitalElements]) -> Vec<f64> {
        derived.iter().filter_map(|d| self.get(d)).collect()
    }
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` bin edges, ascending.
    pub edges: Vec<f64>,
    /// Count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Build an equal-width histogram over `[min, max]` of the values.
///
/// Bins are half-open `[lo, hi)` except the last one which includes `max`. When every value is
/// equal the range is widened to `[x − 0.5, x + 0.5]`.
///
/// Return
/// ----------
/// * `None` when there is no value or `bins == 0`.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if bins == 0 {
        return None;
    }
    let (lo, hi) = match values.iter().copied().minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => return None,
        MinMaxResult::OneElement(x) => (x - 0.5, x + 0.5),
        MinMaxResult::MinMax(lo, hi) if lo == hi => (lo - 0.5, hi + 0.5),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let width = (hi - lo) / bins as f64;
    let edges = (0..=bins).map(|k| lo + width * k as f64).collect();

    let mut counts = vec![0; bins];
    for x in values {
        let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram { edges, counts })
}

/// Orbital periods usable on a logarithmic axis (defined and strictly positive).
pub fn valid_periods(derived: &[DerivedOrbitalElements]) -> Vec<f64> {
    derived
        .iter()
        .filter_map(|d| d.raw.orbital_period)
        .filter(|p| *p > 0.0)
        .collect()
}

/// Five-number summary of a distribution (box plot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStats {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl BoxStats {
    /// Compute the summary with linearly interpolated quantiles, `None` for an empty input.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let sorted: Vec<f64> = values.iter().copied().sorted_by(f64::total_cmp).collect();
        if sorted.is_empty() {
            return None;
        }
        Some(BoxStats {
            min: sorted[0],
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Number of comets per discovery year, ascending year. Records without a year are skipped.
pub fn discovery_counts(derived: &[DerivedOrbitalElements]) -> BTreeMap<i32, usize> {
    derived
        .iter()
        .filter_map(|d| d.discovery_year)
        .counts()
        .into_iter()
        .collect()
}

/// Number of comets per family; unclassified records are counted under `None`.
pub fn family_counts(derived: &[DerivedOrbitalElements]) -> BTreeMap<Option<CometFamily>, usize> {
    derived.iter().map(|d| d.family).counts().into_iter().collect()
}

/// Count of comets per family, indexed by [`CometFamily::index`].
pub type FamilyTally = [usize; 3];

/// Number of comets of each family per discovery year (zero-filled).
///
/// Records lacking a year or a family are skipped.
pub fn family_timeline(derived: &[DerivedOrbitalElements]) -> BTreeMap<i32, FamilyTally> {
    let mut timeline: BTreeMap<i32, FamilyTally> = BTreeMap::new();
    for d in derived {
        if let (Some(year), Some(family)) = (d.discovery_year, d.family) {
            timeline.entry(year).or_default()[family.index()] += 1;
        }
    }
    timeline
}

/// Pearson correlation of two columns over the records where both are defined.
///
/// Return
/// ----------
/// * `None` with fewer than two complete pairs or a zero variance.
pub fn pearson(derived: &[DerivedOrbitalElements], x: OrbitColumn, y: OrbitColumn) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = derived
        .iter()
        .filter_map(|d| Some((x.get(d)?, y.get(d)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (px, py) in &pairs {
        let (dx, dy) = (px - mean_x, py - mean_y);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return None;
    }
    Some((sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0))
}

/// Square matrix of pairwise correlations.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    pub columns: Vec<OrbitColumn>,
    /// `values[i][j]` is the correlation of `columns[i]` with `columns[j]`.
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    pub fn get(&self, x: OrbitColumn, y: OrbitColumn) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == x)?;
        let j = self.columns.iter().position(|c| *c == y)?;
        self.values[i][j]
    }
}

/// Correlation heatmap over [`OrbitColumn::CORRELATION`].
pub fn correlation_matrix(derived: &[DerivedOrbitalElements]) -> CorrelationMatrix {
    let columns = OrbitColumn::CORRELATION.to_vec();
    let values = columns
        .iter()
        .map(|x| columns.iter().map(|y| pearson(derived, *x, *y)).collect())
        .collect();
    CorrelationMatrix { columns, values }
}

/// Counters shown next to the detailed comet panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogSummary {
    pub total: usize,
    pub with_period: usize,
    /// `(min, max)` of the defined orbital periods (years).
    pub period_range: Option<(f64, f64)>,
    /// Span of the defined eccentricities, the default range of the eccentricity filter.
    pub eccentricity_span: Option<EccentricityRange>,
}

fn value_span(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    match values.minmax_by(f64::total_cmp) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

impl CatalogSummary {
    pub fn from_derived(derived: &[DerivedOrbitalElements]) -> Self {
        let periods: Vec<f64> = derived.iter().filter_map(|d| d.raw.orbital_period).collect();
        let eccentricity_span = value_span(derived.iter().filter_map(|d| d.raw.eccentricity))
            .and_then(|(lo, hi)| EccentricityRange::new(lo, hi).ok());
        CatalogSummary {
            total: derived.len(),
            with_period: periods.len(),
            period_range: value_span(periods.iter().copied()),
            eccentricity_span,
        }
    }
}
