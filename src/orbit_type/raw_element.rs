use std::fmt;

use serde_json::{Map, Value};

use crate::constants::{columns, AstronomicalUnit, Degree};

/// # Raw catalog orbital elements
///
/// One comet entry of the near-Earth comet catalog, as fetched, with every numeric cell either
/// parsed to a decimal value or explicitly undefined (`None`).
///
/// Units & conventions
/// --------------------
/// - Distances in **AU**; angles in **degrees**; periods in **years**.
/// - `epoch` is a day offset from 2000-01-01 (see [`crate::time::reference_epoch`]).
/// - `eccentricity ≥ 1` (parabolic/hyperbolic) is a valid input, not an error.
///
/// See also
/// ------------
/// * [`parse_numeric_cell`] – Lenient coercion of JSON cells.
/// * [`crate::orbit_type::derived_element::DerivedOrbitalElements`] – Quantities derived from this record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawOrbitalElements {
    /// Catalog designation (e.g. `"P/2004 R1 (McNaught)"`), used as display key.
    pub designation: String,

    /// Eccentricity `e`.
    pub eccentricity: Option<f64>,

    /// Perihelion distance `q` (AU).
    pub perihelion_distance: Option<AstronomicalUnit>,

    /// Aphelion distance `Q` (AU), undefined for unbound orbits.
    pub aphelion_distance: Option<AstronomicalUnit>,

    /// Inclination `i` (deg).
    pub inclination: Option<Degree>,

    /// Argument of perihelion `ω` (deg).
    pub periapsis_argument: Option<Degree>,

    /// Longitude of the ascending node `Ω` (deg).
    pub ascending_node_longitude: Option<Degree>,

    /// Orbital period (years).
    pub orbital_period: Option<f64>,

    /// Minimum orbit intersection distance with the Earth (AU).
    pub moid: Option<AstronomicalUnit>,

    /// Epoch of the elements, days since 2000-01-01.
    pub epoch: Option<f64>,

    /// Absolute magnitude `H`.
    pub absolute_magnitude: Option<f64>,
}

impl RawOrbitalElements {
    /// Build a record from a cell lookup.
    ///
    /// Arguments
    /// -----------------
    /// * `designation`: the designation cell, if present.
    /// * `numeric`: returns the parsed value of a numeric column, `None` when the cell is absent
    ///   or unparsable.
    pub(crate) fn from_cells<F>(designation: Option<String>, numeric: F) -> Self
    where
        F: Fn(&str) -> Option<f64>,
    {
        RawOrbitalElements {
            designation: designation.unwrap_or_default(),
            eccentricity: numeric(columns::ECCENTRICITY),
            perihelion_distance: numeric(columns::PERIHELION_DISTANCE),
            aphelion_distance: numeric(columns::APHELION_DISTANCE),
            inclination: numeric(columns::INCLINATION),
            periapsis_argument: numeric(columns::PERIAPSIS_ARGUMENT),
            ascending_node_longitude: numeric(columns::ASCENDING_NODE),
            orbital_period: numeric(columns::ORBITAL_PERIOD),
            moid: numeric(columns::MOID),
            epoch: numeric(columns::EPOCH),
            absolute_magnitude: numeric(columns::ABSOLUTE_MAGNITUDE),
        }
    }

    /// Build a record from one object of the catalog JSON export.
    ///
    /// The Socrata export encodes numbers as JSON strings (`"0.6983"`); both strings and JSON
    /// numbers are accepted. Anything else becomes undefined for that field only.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let designation = object
            .get(columns::DESIGNATION)
            .and_then(|value| match value {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

        RawOrbitalElements::from_cells(designation, |column| {
            object.get(column).and_then(parse_numeric_cell)
        })
    }
}

/// Coerce a JSON cell into a finite decimal value.
///
/// Return
/// ----------
/// * `Some(x)` for a finite JSON number or a string holding one, `None` otherwise
///   (null, booleans, text, NaN/∞).
pub fn parse_numeric_cell(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|x| x.is_finite()),
        Value::String(s) => parse_numeric_text(s),
        _ => None,
    }
}

/// Coerce a text cell into a finite decimal value, `None` when it does not parse.
pub fn parse_numeric_text(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|x| x.is_finite())
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "undefined".to_string(), |x| format!("{x:.6}"))
}

impl fmt::Display for RawOrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Catalog elements of {}", self.designation)?;
        writeln!(f, "------------------------------------------------")?;
        writeln!(f, "  e   (eccentricity)            = {}", fmt_opt(self.eccentricity))?;
        writeln!(
            f,
            "  q   (perihelion distance)     = {} AU",
            fmt_opt(self.perihelion_distance)
        )?;
        writeln!(f, "  i   (inclination)             = {}°", fmt_opt(self.inclination))?;
        writeln!(
            f,
            "  ω   (argument of perihelion)  = {}°",
            fmt_opt(self.periapsis_argument)
        )?;
        writeln!(
            f,
            "  Ω   (longitude of node)       = {}°",
            fmt_opt(self.ascending_node_longitude)
        )?;
        writeln!(f, "  P   (orbital period)          = {} yr", fmt_opt(self.orbital_period))?;
        writeln!(f, "  MOID                          = {} AU", fmt_opt(self.moid))?;
        writeln!(f, "  epoch (days since 2000-01-01) = {}", fmt_opt(self.epoch))?;
        writeln!(f, "  H   (absolute magnitude)      = {}", fmt_opt(self.absolute_magnitude))
    }
}
