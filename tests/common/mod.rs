#![allow(dead_code)]

use approx::assert_relative_eq;
use neocomet::{DerivedOrbitalElements, RawOrbitalElements};

/// Reference comet: e = 0.5, q = 1 AU, i = 10°, ω = 50°, Ω = 100°, epoch 2000-01-01, H = 12.
pub fn reference_comet(designation: &str) -> RawOrbitalElements {
    RawOrbitalElements {
        designation: designation.to_string(),
        eccentricity: Some(0.5),
        perihelion_distance: Some(1.0),
        aphelion_distance: Some(3.0),
        inclination: Some(10.0),
        periapsis_argument: Some(50.0),
        ascending_node_longitude: Some(100.0),
        orbital_period: Some(5.0),
        moid: Some(0.1),
        epoch: Some(0.0),
        absolute_magnitude: Some(12.0),
    }
}

pub fn with_eccentricity(designation: &str, e: Option<f64>) -> RawOrbitalElements {
    RawOrbitalElements {
        eccentricity: e,
        ..reference_comet(designation)
    }
}

fn assert_opt_close(actual: Option<f64>, expected: Option<f64>, epsilon: f64) {
    match (actual, expected) {
        (Some(a), Some(b)) => assert_relative_eq!(a, b, epsilon = epsilon),
        (None, None) => {}
        _ => panic!("definedness mismatch: {actual:?} != {expected:?}"),
    }
}

pub fn assert_derived_close(
    actual: &DerivedOrbitalElements,
    expected: &DerivedOrbitalElements,
    epsilon: f64,
) {
    assert_eq!(actual.raw, expected.raw);
    assert_opt_close(actual.semi_major_axis, expected.semi_major_axis, epsilon);
    assert_opt_close(
        actual.tisserand_parameter,
        expected.tisserand_parameter,
        epsilon,
    );
    assert_opt_close(
        actual.estimated_diameter,
        expected.estimated_diameter,
        epsilon,
    );
    assert_eq!(actual.discovery_year, expected.discovery_year);
    assert_eq!(actual.family, expected.family);
}
