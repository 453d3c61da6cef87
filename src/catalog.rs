//! # Comet catalog batches
//!
//! A [`CometCatalog`] is the batch handed by the dataset loader to the derivation pipeline: the
//! parsed [`RawOrbitalElements`] records **plus the set of columns observed** while parsing.
//!
//! The schema is what distinguishes the two failure tiers of the pipeline:
//!
//! - a *cell* that does not parse becomes an undefined field of that record only;
//! - a *column* absent from the whole batch is a contract violation of the upstream source and is
//!   reported by [`CometCatalog::validate_schema`] as a fatal [`NeoCometError::SchemaError`].
//!
//! ## Sources
//!
//! - [`CometCatalog::from_json_str`] — the NASA open data JSON export (array of objects whose
//!   values are strings).
//! - [`CometCatalog::from_csv_reader`] — the same table as CSV with a header row.
//! - [`CometCatalog::from_records`] — in-memory records, assumed to carry every column.
//!
//! Derived records can be written back as a table with [`write_derived_csv`]; undefined values
//! are written as empty cells.
use std::{
    collections::BTreeSet,
    io::{Read, Write},
};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::{
    constants::columns,
    neocomet_errors::NeoCometError,
    orbit_type::{
        derived_element::DerivedOrbitalElements,
        raw_element::{parse_numeric_text, RawOrbitalElements},
    },
    time::iso_date,
};

/// Batch of raw catalog records together with the columns observed in the source.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CometCatalog {
    schema: BTreeSet<String>,
    records: Vec<RawOrbitalElements>,
}

impl CometCatalog {
    /// Wrap in-memory records; the batch is considered to carry every known column.
    pub fn from_records(records: Vec<RawOrbitalElements>) -> Self {
        let schema = columns::REQUIRED
            .iter()
            .copied()
            .chain([columns::APHELION_DISTANCE, columns::ABSOLUTE_MAGNITUDE])
            .map(String::from)
            .collect();
        CometCatalog { schema, records }
    }

    /// Wrap records with an explicit set of observed columns.
    pub fn with_schema<I, S>(schema: I, records: Vec<RawOrbitalElements>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CometCatalog {
            schema: schema.into_iter().map(Into::into).collect(),
            records,
        }
    }

    /// Parse the JSON export of the catalog.
    ///
    /// Arguments
    /// -----------------
    /// * `payload`: a JSON array of objects, one per comet.
    ///
    /// Return
    /// ----------
    /// * The parsed catalog; an empty array yields an empty catalog (not an error).
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::JsonError` – when the payload is not an array of objects.
    pub fn from_json_str(payload: &str) -> Result<Self, NeoCometError> {
        let objects: Vec<Map<String, Value>> = serde_json::from_str(payload)?;

        let schema = objects
            .iter()
            .flat_map(|object| object.keys().cloned())
            .collect();
        let records = objects
            .iter()
            .map(RawOrbitalElements::from_json_object)
            .collect();

        let catalog = CometCatalog { schema, records };
        catalog.log_loaded("json");
        Ok(catalog)
    }

    /// Parse the catalog from CSV with a header row.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::CsvError` – on malformed CSV (ragged rows, invalid UTF-8, I/O failure).
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, NeoCometError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column_index = |name: &str| headers.iter().position(|h| h == name);

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row?;
            let cell = |name: &str| column_index(name).and_then(|idx| row.get(idx));

            let designation = cell(columns::DESIGNATION)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            records.push(RawOrbitalElements::from_cells(designation, |name| {
                cell(name).and_then(parse_numeric_text)
            }));
        }

        let catalog = CometCatalog {
            schema: headers.iter().map(str::to_string).collect(),
            records,
        };
        catalog.log_loaded("csv");
        Ok(catalog)
    }

    fn log_loaded(&self, source: &str) {
        info!(source, records = self.records.len(), "comet catalog parsed");
        let missing = self.missing_columns();
        if !self.records.is_empty() && !missing.is_empty() {
            warn!(?missing, "comet catalog lacks required columns");
        }
    }

    pub fn records(&self) -> &[RawOrbitalElements] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawOrbitalElements> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Columns observed in the source, in lexicographic order.
    pub fn schema(&self) -> impl Iterator<Item = &str> {
        self.schema.iter().map(String::as_str)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.schema.contains(column)
    }

    /// Required columns absent from the whole batch.
    pub fn missing_columns(&self) -> Vec<String> {
        columns::REQUIRED
            .iter()
            .copied()
            .filter(|column| !self.has_column(column))
            .map(String::from)
            .collect()
    }

    /// Check that every required column is present.
    ///
    /// An empty catalog trivially satisfies the contract: "zero records" is a valid answer of the
    /// source, distinct from a malformed one.
    ///
    /// Errors
    /// ----------
    /// * `NeoCometError::SchemaError` – listing every missing required column.
    pub fn validate_schema(&self) -> Result<(), NeoCometError> {
        if self.records.is_empty() {
            return Ok(());
        }
        let missing = self.missing_columns();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(NeoCometError::SchemaError { missing })
        }
    }

    /// Find a record by designation.
    pub fn find(&self, designation: &str) -> Option<&RawOrbitalElements> {
        self.records.iter().find(|r| r.designation == designation)
    }
}

impl<'a> IntoIterator for &'a CometCatalog {
    type Item = &'a RawOrbitalElements;
    type IntoIter = std::slice::Iter<'a, RawOrbitalElements>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One row of the derived table export.
#[derive(Debug, Serialize)]
struct DerivedRow<'a> {
    object: &'a str,
    e: Option<f64>,
    q_au_1: Option<f64>,
    q_au_2: Option<f64>,
    i_deg: Option<f64>,
    w_deg: Option<f64>,
    node_deg: Option<f64>,
    p_yr: Option<f64>,
    moid_au: Option<f64>,
    epoch_tdb: Option<f64>,
    h_mag: Option<f64>,
    a_au: Option<f64>,
    tisserand: Option<f64>,
    discovery_date: Option<String>,
    discovery_year: Option<i32>,
    family: Option<&'static str>,
    estimated_diameter_km: Option<f64>,
    orbital_energy_j_kg: Option<f64>,
}

impl<'a> From<&'a DerivedOrbitalElements> for DerivedRow<'a> {
    fn from(d: &'a DerivedOrbitalElements) -> Self {
        let raw = &d.raw;
        DerivedRow {
            object: &raw.designation,
            e: raw.eccentricity,
            q_au_1: raw.perihelion_distance,
            q_au_2: raw.aphelion_distance,
            i_deg: raw.inclination,
            w_deg: raw.periapsis_argument,
            node_deg: raw.ascending_node_longitude,
            p_yr: raw.orbital_period,
            moid_au: raw.moid,
            epoch_tdb: raw.epoch,
            h_mag: raw.absolute_magnitude,
            a_au: d.semi_major_axis,
            tisserand: d.tisserand_parameter,
            discovery_date: d.discovery_epoch.as_ref().map(iso_date),
            discovery_year: d.discovery_year,
            family: d.family.map(|f| f.label()),
            estimated_diameter_km: d.estimated_diameter,
            orbital_energy_j_kg: d.specific_orbital_energy,
        }
    }
}

/// Write derived records as CSV (header row included).
///
/// Undefined fields are written as empty cells, never as zero.
pub fn write_derived_csv<W: Write>(
    writer: W,
    derived: &[DerivedOrbitalElements],
) -> Result<(), NeoCometError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in derived {
        csv_writer.serialize(DerivedRow::from(record))?;
    }
    csv_writer.flush()?;
    Ok(())
}
