//! # Elementary rotations between orbital frames
//!
//! The orbit path of a comet is first computed in its **perifocal frame** (x towards perihelion,
//! z along the orbital angular momentum) and then rotated into the heliocentric ecliptic frame of
//! the catalog elements using the classical 3-1-3 sequence `Rz(Ω) · Rx(i) · Rz(ω)`.
use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Build the rotation matrix of angle `alpha` around a coordinate axis.
///
/// Arguments
/// -----------------
/// * `alpha`: rotation angle in **radians** (positive = direct/trigonometric sense).
/// * `axis`: axis of the rotation.
///
/// Return
/// ----------
/// * A 3×3 orthonormal matrix `R` such that the rotated vector is `x' = R · x`.
///   The rotation is applied to the vector in a fixed frame, it is not a change of basis.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the perifocal frame to the reference (ecliptic) frame.
///
/// Arguments
/// -----------------
/// * `ascending_node_longitude`: Ω (rad).
/// * `inclination`: i (rad).
/// * `periapsis_argument`: ω (rad).
///
/// Return
/// ----------
/// * `Rz(Ω) · Rx(i) · Rz(ω)`. Applied to `(r cos θ, r sin θ, 0)` it gives
///   `x = r[cos Ω cos(θ+ω) − sin Ω sin(θ+ω) cos i]`,
///   `y = r[sin Ω cos(θ+ω) + cos Ω sin(θ+ω) cos i]`,
///   `z = r sin(θ+ω) sin i`.
pub fn perifocal_to_ecliptic(
    ascending_node_longitude: Radian,
    inclination: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    rotmt(ascending_node_longitude, Axis::Z)
        * rotmt(inclination, Axis::X)
        * rotmt(periapsis_argument, Axis::Z)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotmt_direct_sense() {
        let rot = rotmt(FRAC_PI_2, Axis::Z);
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-15);

        let rot = rotmt(FRAC_PI_2, Axis::X);
        let v = rot * Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);
    }

    #[test]
    fn test_perifocal_to_ecliptic_expansion() {
        let (node, incl, peri) = (1.1_f64, 0.4_f64, 2.3_f64);
        let theta = 0.7_f64;
        let r = 1.8;

        let rot = perifocal_to_ecliptic(node, incl, peri);
        let pos = rot * Vector3::new(r * theta.cos(), r * theta.sin(), 0.0);

        let u = theta + peri;
        let expected = Vector3::new(
            r * (node.cos() * u.cos() - node.sin() * u.sin() * incl.cos()),
            r * (node.sin() * u.cos() + node.cos() * u.sin() * incl.cos()),
            r * u.sin() * incl.sin(),
        );
        assert_relative_eq!(pos, expected, epsilon = 1e-14);
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let rot = perifocal_to_ecliptic(0.3, 2.9, 5.0);
        assert_relative_eq!(rot * rot.transpose(), Matrix3::identity(), epsilon = 1e-14);
    }
}
