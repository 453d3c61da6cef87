//! # Sampled 3D orbit paths
//!
//! Builds the heliocentric orbit of a **bound** comet as a lazy sequence of `(x, y, z)` points in
//! AU, sampling the true anomaly uniformly.
//!
//! ## Sampling convention
//!
//! For `n` samples the true anomalies are `θ_k = 2πk / n` for `k = 0, …, n − 1`: the half-open
//! range `[0, 2π)`. The point at `θ = 2π` would duplicate the point at `θ = 0`, so it is **not**
//! part of the sequence; [`OrbitPath::closed_loop`] appends it for renderers drawing connected
//! segments.
//!
//! ## Geometry
//!
//! ```text
//! r(θ) = a (1 − e²) / (1 + e cos θ)
//! X    = Rz(Ω) · Rx(i) · Rz(ω) · (r cos θ, r sin θ, 0)
//! ```
//!
//! Unbound orbits (`e ≥ 1` or `a ≤ 0`) have no closed path: requesting one is an
//! [`NeoCometError::InvalidOrbitGeometry`] rather than a sequence of NaN or infinite points.
use std::iter::{Chain, FusedIterator, Once};

use nalgebra::{Matrix3, Vector3};
use tracing::debug;

use crate::{
    constants::{AstronomicalUnit, Radian, DPI, RADEG},
    neocomet_errors::NeoCometError,
    orbit_type::derived_element::DerivedOrbitalElements,
    ref_system::perifocal_to_ecliptic,
};

/// Lazy, restartable sequence of orbit points (AU, heliocentric ecliptic frame).
///
/// Each point is computed on demand from its sample index. A clone carries on from the same
/// position as the original; [`OrbitPath::restart`] starts over from the first sample.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    semi_latus_rectum: AstronomicalUnit,
    eccentricity: f64,
    rotation: Matrix3<f64>,
    sample_count: usize,
    front: usize,
    back: usize,
}

impl OrbitPath {
    /// Number of samples of the full path (independent of iteration progress).
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// True anomaly of the sample `index`.
    pub fn true_anomaly(&self, index: usize) -> Radian {
        DPI * index as f64 / self.sample_count as f64
    }

    /// Position at an arbitrary true anomaly `theta` (rad).
    pub fn position_at(&self, theta: Radian) -> Vector3<f64> {
        let r = self.semi_latus_rectum / (1.0 + self.eccentricity * theta.cos());
        self.rotation * Vector3::new(r * theta.cos(), r * theta.sin(), 0.0)
    }

    /// Position of the sample `index`.
    pub fn point(&self, index: usize) -> Vector3<f64> {
        self.position_at(self.true_anomaly(index))
    }

    /// A fresh copy of this path positioned on its first sample.
    pub fn restart(&self) -> OrbitPath {
        OrbitPath {
            front: 0,
            back: self.sample_count,
            ..self.clone()
        }
    }

    /// The full path followed by its first point again (`sample_count + 1` points), so that
    /// connecting consecutive points draws a closed curve.
    pub fn closed_loop(&self) -> Chain<OrbitPath, Once<Vector3<f64>>> {
        let fresh = self.restart();
        let first = fresh.point(0);
        fresh.chain(std::iter::once(first))
    }
}

impl Iterator for OrbitPath {
    type Item = Vector3<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let p = self.point(self.front);
        self.front += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for OrbitPath {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for OrbitPath {}

impl FusedIterator for OrbitPath {}

/// Build the sampled 3D orbit of a comet.
///
/// Arguments
/// -----------------
/// * `elements`: derived elements of the comet; its semi-major axis, eccentricity and the three
///   orientation angles must be defined.
/// * `sample_count`: number of points of the path (strictly positive).
///
/// Return
/// ----------
/// * An [`OrbitPath`] yielding exactly `sample_count` points.
///
/// Errors
/// ----------
/// * `NeoCometError::InvalidSampleCount` – when `sample_count == 0`.
/// * `NeoCometError::InvalidOrbitGeometry` – when the orbit is not a bound ellipse
///   (`a` undefined or `≤ 0`, `e` undefined or outside `[0, 1)`) or an angle is undefined.
///
/// See also
/// ------------
/// * [`perifocal_to_ecliptic`] – Orientation of the orbital plane.
pub fn compute_orbit_path(
    elements: &DerivedOrbitalElements,
    sample_count: usize,
) -> Result<OrbitPath, NeoCometError> {
    if sample_count == 0 {
        return Err(NeoCometError::InvalidSampleCount);
    }

    let raw = &elements.raw;
    let geometry_error = |reason: String| {
        debug!(designation = %raw.designation, %reason, "orbit path rejected");
        NeoCometError::InvalidOrbitGeometry(format!("{}: {reason}", raw.designation))
    };

    let a = match elements.semi_major_axis {
        Some(a) if a > 0.0 => a,
        Some(a) => return Err(geometry_error(format!("semi-major axis {a} AU is not positive"))),
        None => return Err(geometry_error("semi-major axis is undefined".into())),
    };
    let e = match raw.eccentricity {
        Some(e) if (0.0..1.0).contains(&e) => e,
        Some(e) => return Err(geometry_error(format!("eccentricity {e} is not elliptical"))),
        None => return Err(geometry_error("eccentricity is undefined".into())),
    };
    let (Some(incl), Some(peri), Some(node)) = (
        raw.inclination,
        raw.periapsis_argument,
        raw.ascending_node_longitude,
    ) else {
        return Err(geometry_error("orientation angles are undefined".into()));
    };

    Ok(OrbitPath {
        semi_latus_rectum: a * (1.0 - e * e),
        eccentricity: e,
        rotation: perifocal_to_ecliptic(node * RADEG, incl * RADEG, peri * RADEG),
        sample_count,
        front: 0,
        back: sample_count,
    })
}

#[cfg(test)]
mod orbit_path_test {
    use super::*;
    use crate::orbit_type::raw_element::RawOrbitalElements;
    use approx::assert_relative_eq;

    fn comet(e: f64, q: f64) -> DerivedOrbitalElements {
        DerivedOrbitalElements::derive(&RawOrbitalElements {
            designation: "Test comet".into(),
            eccentricity: Some(e),
            perihelion_distance: Some(q),
            inclination: Some(10.0),
            periapsis_argument: Some(50.0),
            ascending_node_longitude: Some(100.0),
            epoch: Some(0.0),
            ..Default::default()
        })
    }

    #[test]
    fn test_exact_point_count() {
        let path = compute_orbit_path(&comet(0.5, 1.0), 1000).unwrap();
        assert_eq!(path.len(), 1000);
        assert_eq!(path.clone().count(), 1000);
        assert_eq!(path.closed_loop().count(), 1001);

        let single = compute_orbit_path(&comet(0.5, 1.0), 1).unwrap();
        assert_eq!(single.count(), 1);
    }

    #[test]
    fn test_half_open_sampling_closes() {
        let path = compute_orbit_path(&comet(0.5, 1.0), 1000).unwrap();
        let points: Vec<_> = path.clone().collect();

        // The first sample is the perihelion, the last one stops one step before 2π
        assert_relative_eq!(points[0].norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(path.true_anomaly(999), DPI * 999.0 / 1000.0);
        assert!((points[999] - points[0]).norm() > 1e-6);

        // Evaluating at 2π lands back on the first point
        assert_relative_eq!(path.position_at(DPI), points[0], epsilon = 1e-12);
        let closed: Vec<_> = path.closed_loop().collect();
        assert_eq!(closed[1000], closed[0]);
    }

    #[test]
    fn test_aphelion_distance() {
        let path = compute_orbit_path(&comet(0.5, 1.0), 1000).unwrap();
        // θ = π at sample n/2: r = a(1 + e) = 3 AU
        assert_relative_eq!(path.point(500).norm(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_restartable_and_double_ended() {
        let mut path = compute_orbit_path(&comet(0.3, 2.0), 8).unwrap();
        let first = path.next().unwrap();
        let last = path.next_back().unwrap();
        assert_eq!(path.len(), 6);

        let mut resumed = path.clone();
        assert_eq!(resumed.len(), 6);
        assert_eq!(resumed.next(), Some(path.point(1)));

        let fresh = path.restart();
        assert_eq!(fresh.len(), 8);
        let all: Vec<_> = fresh.collect();
        assert_eq!(all[0], first);
        assert_eq!(all[7], last);
    }

    #[test]
    fn test_matches_closed_form_coordinates() {
        let path = compute_orbit_path(&comet(0.5, 1.0), 12).unwrap();
        let (node, incl, peri) = (100f64.to_radians(), 10f64.to_radians(), 50f64.to_radians());

        for (k, p) in path.enumerate() {
            let theta = DPI * k as f64 / 12.0;
            let r = 2.0 * (1.0 - 0.25) / (1.0 + 0.5 * theta.cos());
            let u = theta + peri;
            let x = r * (node.cos() * u.cos() - node.sin() * u.sin() * incl.cos());
            let y = r * (node.sin() * u.cos() + node.cos() * u.sin() * incl.cos());
            let z = r * u.sin() * incl.sin();
            assert_relative_eq!(p, Vector3::new(x, y, z), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_invalid_geometry() {
        let err = compute_orbit_path(&comet(1.2, 1.0), 100).unwrap_err();
        assert!(matches!(err, NeoCometError::InvalidOrbitGeometry(_)));

        let err = compute_orbit_path(&comet(1.0, 1.0), 100).unwrap_err();
        assert!(matches!(err, NeoCometError::InvalidOrbitGeometry(_)));

        let mut no_angles = comet(0.5, 1.0);
        no_angles.raw.ascending_node_longitude = None;
        let err = compute_orbit_path(&no_angles, 100).unwrap_err();
        assert!(matches!(err, NeoCometError::InvalidOrbitGeometry(_)));

        assert_eq!(
            compute_orbit_path(&comet(0.5, 1.0), 0).unwrap_err(),
            NeoCometError::InvalidSampleCount
        );
    }
}
