//! # Constants and type definitions for neocomet
//!
//! This module centralizes the **physical constants**, **conversion factors** and **common type
//! definitions** used by the derivation pipeline and the catalog loader.
//!
//! ## Overview
//!
//! - Astronomical constants (AU, gravitational constant, solar mass, Jupiter's orbit)
//! - Unit conversions (degrees ↔ radians)
//! - Core type aliases used across the crate
//! - Column names of the NASA near-Earth comet dataset
//!
//! The values of `AU_METERS`, `GRAVITATIONAL_CONSTANT` and `SOLAR_MASS` are the ones used by the
//! dashboard charts (orbital energy panel); they are kept as-is so derived energies match the
//! published figures.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Astronomical Unit in meters, as used for the specific orbital energy
pub const AU_METERS: f64 = 1.496e11;

/// Newtonian gravitational constant (m³ kg⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Mass of the Sun (kg)
pub const SOLAR_MASS: f64 = 1.98847e30;

/// Semi-major axis of Jupiter's orbit (AU), reference for the Tisserand parameter
pub const JUPITER_SEMI_MAJOR_AXIS: f64 = 5.2;

/// Conversion constant of the magnitude/diameter relation (km)
pub const DIAMETER_MAGNITUDE_CONSTANT: f64 = 1329.0;

/// Geometric albedo assumed for the diameter estimate
pub const DEFAULT_ALBEDO: f64 = 0.04;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Specific orbital energy (J/kg)
pub type JoulePerKilogram = f64;

// -------------------------------------------------------------------------------------------------
// Dataset columns
// -------------------------------------------------------------------------------------------------

/// Default location of the NASA near-Earth comets dataset (Socrata JSON export).
pub const NASA_COMET_DATASET_URL: &str = "https://data.nasa.gov/resource/b67r-rgxc.json";

/// Column names of the near-Earth comet dataset.
pub mod columns {
    pub const DESIGNATION: &str = "object";
    pub const ECCENTRICITY: &str = "e";
    pub const PERIHELION_DISTANCE: &str = "q_au_1";
    pub const APHELION_DISTANCE: &str = "q_au_2";
    pub const INCLINATION: &str = "i_deg";
    pub const PERIAPSIS_ARGUMENT: &str = "w_deg";
    pub const ASCENDING_NODE: &str = "node_deg";
    pub const ORBITAL_PERIOD: &str = "p_yr";
    pub const MOID: &str = "moid_au";
    pub const EPOCH: &str = "epoch_tdb";
    pub const ABSOLUTE_MAGNITUDE: &str = "h_mag";

    /// Columns every batch must carry; a batch missing one of them is rejected as a whole.
    pub const REQUIRED: [&str; 9] = [
        DESIGNATION,
        ECCENTRICITY,
        PERIHELION_DISTANCE,
        INCLINATION,
        PERIAPSIS_ARGUMENT,
        ASCENDING_NODE,
        ORBITAL_PERIOD,
        MOID,
        EPOCH,
    ];
}
