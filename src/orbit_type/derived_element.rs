use hifitime::Epoch;

use crate::{
    constants::{
        AstronomicalUnit, Degree, JoulePerKilogram, Kilometer, AU_METERS, DEFAULT_ALBEDO,
        DIAMETER_MAGNITUDE_CONSTANT, GRAVITATIONAL_CONSTANT, JUPITER_SEMI_MAJOR_AXIS, RADEG,
        SOLAR_MASS,
    },
    neocomet_errors::NeoCometError,
    orbit_path::{compute_orbit_path, OrbitPath},
    orbit_type::{
        family::{classify_family, CometFamily},
        raw_element::RawOrbitalElements,
    },
    time::{calendar_year, epoch_from_day_offset},
};

/// # Derived orbital quantities
///
/// Quantities computed from a single [`RawOrbitalElements`] record. Every field is derived
/// independently: a field that cannot be computed is `None` and does not prevent the others.
///
/// Units & conventions
/// --------------------
/// - `semi_major_axis` in **AU**, negative for hyperbolic orbits, undefined for parabolic ones.
/// - `estimated_diameter` in **km**; `specific_orbital_energy` in **J/kg**.
/// - `discovery_epoch` is the catalog epoch offset applied to 2000-01-01.
///
/// See also
/// ------------
/// * [`crate::pipeline::derive_all`] – Batch derivation with eccentricity filtering.
/// * [`DerivedOrbitalElements::orbit_path`] – Sampled 3D orbit of a bound comet.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedOrbitalElements {
    /// Source record, kept for tabulation.
    pub raw: RawOrbitalElements,

    pub semi_major_axis: Option<AstronomicalUnit>,

    pub tisserand_parameter: Option<f64>,

    pub discovery_epoch: Option<Epoch>,

    pub discovery_year: Option<i32>,

    pub family: Option<CometFamily>,

    pub estimated_diameter: Option<Kilometer>,

    pub specific_orbital_energy: Option<JoulePerKilogram>,
}

impl DerivedOrbitalElements {
    /// Derive every quantity of a catalog record.
    ///
    /// This is a pure function of `raw`: no state is shared between records.
    pub fn derive(raw: &RawOrbitalElements) -> Self {
        let semi_major_axis = semi_major_axis(raw.perihelion_distance, raw.eccentricity);
        let tisserand = tisserand_parameter(semi_major_axis, raw.eccentricity, raw.inclination);
        let discovery_epoch = raw.epoch.and_then(epoch_from_day_offset);

        DerivedOrbitalElements {
            raw: raw.clone(),
            semi_major_axis,
            tisserand_parameter: tisserand,
            discovery_epoch,
            discovery_year: discovery_epoch.as_ref().map(calendar_year),
            family: classify_family(tisserand),
            estimated_diameter: raw.absolute_magnitude.and_then(estimated_diameter),
            specific_orbital_energy: semi_major_axis.and_then(specific_orbital_energy),
        }
    }

    /// Sample the 3D orbit of this comet.
    ///
    /// Shorthand for [`compute_orbit_path`]; fails with `InvalidOrbitGeometry` for unbound or
    /// incomplete element sets.
    pub fn orbit_path(&self, sample_count: usize) -> Result<OrbitPath, NeoCometError> {
        compute_orbit_path(self, sample_count)
    }

    /// Whether the orbit is a bound ellipse (`a > 0`, `e < 1`).
    pub fn is_bound(&self) -> bool {
        matches!(
            (self.semi_major_axis, self.raw.eccentricity),
            (Some(a), Some(e)) if a > 0.0 && e < 1.0
        )
    }
}

impl From<&RawOrbitalElements> for DerivedOrbitalElements {
    fn from(raw: &RawOrbitalElements) -> Self {
        DerivedOrbitalElements::derive(raw)
    }
}

/// Semi-major axis `a = q / (1 − e)`.
///
/// Return
/// ----------
/// * `None` when `q` or `e` is undefined, or for a parabolic orbit (`e = 1`, infinite axis).
/// * A negative value for hyperbolic orbits (`e > 1`): this is the signal of an unbound orbit.
pub fn semi_major_axis(
    perihelion_distance: Option<AstronomicalUnit>,
    eccentricity: Option<f64>,
) -> Option<AstronomicalUnit> {
    let (q, e) = (perihelion_distance?, eccentricity?);
    if e == 1.0 {
        return None;
    }
    Some(q / (1.0 - e)).filter(|a| a.is_finite())
}

/// Tisserand parameter with respect to Jupiter.
///
/// `T = a_J/a + 2 · sqrt((1 − e²) · a / a_J) · cos(i)` with `a_J` = 5.2 AU.
///
/// Return
/// ----------
/// * `None` when an input is undefined, when `a ≤ 0`, or when `(1 − e²)·a < 0`; the parameter
///   is never clamped or computed from a negative square root argument.
pub fn tisserand_parameter(
    semi_major_axis: Option<AstronomicalUnit>,
    eccentricity: Option<f64>,
    inclination: Option<Degree>,
) -> Option<f64> {
    let (a, e, i) = (semi_major_axis?, eccentricity?, inclination?);
    if a <= 0.0 {
        return None;
    }
    let radicand = (1.0 - e * e) * a;
    if radicand < 0.0 {
        return None;
    }
    let t = JUPITER_SEMI_MAJOR_AXIS / a
        + 2.0 * (radicand / JUPITER_SEMI_MAJOR_AXIS).sqrt() * (i * RADEG).cos();
    Some(t).filter(|t| t.is_finite())
}

/// Diameter estimate from the absolute magnitude, `D = 1329 / sqrt(p) · 10^(−H/5)` with an
/// assumed albedo `p = 0.04`.
pub fn estimated_diameter(absolute_magnitude: f64) -> Option<Kilometer> {
    let d = DIAMETER_MAGNITUDE_CONSTANT / DEFAULT_ALBEDO.sqrt()
        * 10f64.powf(-0.2 * absolute_magnitude);
    Some(d).filter(|d| d.is_finite())
}

/// Specific orbital energy `ε = −G·M☉ / (2a)`, with `a` converted from AU to meters.
///
/// Return
/// ----------
/// * `None` when `a = 0`; positive for hyperbolic orbits.
pub fn specific_orbital_energy(semi_major_axis: AstronomicalUnit) -> Option<JoulePerKilogram> {
    if semi_major_axis == 0.0 {
        return None;
    }
    let energy = -GRAVITATIONAL_CONSTANT * SOLAR_MASS / (2.0 * semi_major_axis * AU_METERS);
    Some(energy).filter(|x| x.is_finite())
}

#[cfg(test)]
mod derived_element_test {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_comet() -> RawOrbitalElements {
        RawOrbitalElements {
            designation: "Test comet".into(),
            eccentricity: Some(0.5),
            perihelion_distance: Some(1.0),
            aphelion_distance: None,
            inclination: Some(10.0),
            periapsis_argument: Some(50.0),
            ascending_node_longitude: Some(100.0),
            orbital_period: Some(5.0),
            moid: Some(0.1),
            epoch: Some(0.0),
            absolute_magnitude: Some(12.0),
        }
    }

    #[test]
    fn test_semi_major_axis_elliptic() {
        for e in [0.0, 0.1, 0.5, 0.9, 0.999999] {
            let a = semi_major_axis(Some(1.3), Some(e)).unwrap();
            assert!(a > 0.0 && a.is_finite());
            assert_relative_eq!(a, 1.3 / (1.0 - e), max_relative = 1e-15);
        }
    }

    #[test]
    fn test_semi_major_axis_parabolic_and_hyperbolic() {
        assert_eq!(semi_major_axis(Some(1.0), Some(1.0)), None);

        let a = semi_major_axis(Some(1.0), Some(1.2)).unwrap();
        assert!(a < 0.0);
        assert_relative_eq!(a, -5.0, epsilon = 1e-12);

        assert_eq!(semi_major_axis(None, Some(0.3)), None);
        assert_eq!(semi_major_axis(Some(1.0), None), None);
    }

    #[test]
    fn test_tisserand_undefined_for_unbound() {
        let a = semi_major_axis(Some(1.0), Some(1.2));
        assert_eq!(tisserand_parameter(a, Some(1.2), Some(10.0)), None);
        assert_eq!(tisserand_parameter(Some(0.0), Some(0.2), Some(10.0)), None);
        assert_eq!(tisserand_parameter(Some(2.0), Some(0.5), None), None);
        assert_eq!(tisserand_parameter(None, Some(0.5), Some(3.0)), None);
    }

    #[test]
    fn test_tisserand_jupiter_like() {
        // Jupiter's own orbit (a = a_J, e = 0, i = 0) gives T = 3
        let t = tisserand_parameter(Some(JUPITER_SEMI_MAJOR_AXIS), Some(0.0), Some(0.0)).unwrap();
        assert_relative_eq!(t, 3.0, epsilon = 1e-14);
    }

    #[test]
    fn test_estimated_diameter() {
        assert_relative_eq!(estimated_diameter(12.0).unwrap(), 26.454221, epsilon = 1e-5);
        assert_relative_eq!(estimated_diameter(0.0).unwrap(), 6645.0, epsilon = 1e-9);
    }

    #[test]
    fn test_specific_orbital_energy() {
        assert_eq!(specific_orbital_energy(0.0), None);
        let bound = specific_orbital_energy(2.0).unwrap();
        assert_relative_eq!(bound, -2.217855167e8, max_relative = 1e-9);
        assert!(specific_orbital_energy(-5.0).unwrap() > 0.0);
    }

    #[test]
    fn test_derive_reference_comet() {
        let derived = DerivedOrbitalElements::derive(&reference_comet());

        assert_relative_eq!(derived.semi_major_axis.unwrap(), 2.0, epsilon = 1e-12);
        assert_relative_eq!(
            derived.tisserand_parameter.unwrap(),
            2.557853220,
            epsilon = 1e-8
        );
        assert_eq!(derived.family, Some(CometFamily::JupiterFamily));
        assert_eq!(derived.discovery_year, Some(2000));
        assert_relative_eq!(derived.estimated_diameter.unwrap(), 26.4542215, epsilon = 1e-6);
        assert!(derived.specific_orbital_energy.unwrap() < 0.0);
        assert!(derived.is_bound());
    }

    #[test]
    fn test_missing_fields_degrade_independently() {
        let mut raw = reference_comet();
        raw.inclination = None;
        raw.absolute_magnitude = None;
        raw.epoch = None;

        let derived = DerivedOrbitalElements::derive(&raw);
        assert_relative_eq!(derived.semi_major_axis.unwrap(), 2.0, epsilon = 1e-12);
        assert_eq!(derived.tisserand_parameter, None);
        assert_eq!(derived.family, None);
        assert_eq!(derived.estimated_diameter, None);
        assert_eq!(derived.discovery_epoch, None);
        assert_eq!(derived.discovery_year, None);
        assert!(derived.specific_orbital_energy.is_some());
    }

    #[test]
    fn test_hyperbolic_record() {
        let mut raw = reference_comet();
        raw.eccentricity = Some(1.2);

        let derived = DerivedOrbitalElements::derive(&raw);
        assert!(derived.semi_major_axis.unwrap() < 0.0);
        assert_eq!(derived.tisserand_parameter, None);
        assert_eq!(derived.family, None);
        assert!(derived.specific_orbital_energy.unwrap() > 0.0);
        assert!(!derived.is_bound());
    }
}
