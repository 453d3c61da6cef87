use thiserror::Error;

#[derive(Error, Debug)]
pub enum NeoCometError {
    #[error("Catalog schema violation, missing column(s): {}", .missing.join(", "))]
    SchemaError { missing: Vec<String> },

    #[error("Invalid orbit geometry: {0}")]
    InvalidOrbitGeometry(String),

    #[error("Orbit path sample count must be strictly positive")]
    InvalidSampleCount,

    #[error("Invalid eccentricity range: [{min}, {max}]")]
    InvalidFilterRange { min: f64, max: f64 },

    #[error("Comet not found in the filtered catalog: {0}")]
    UnknownDesignation(String),

    #[error("Failed to retrieve the comet catalog, HTTP status {status}")]
    FetchFailed { status: u16 },

    #[error("HTTP reqwest error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Unable to decode the JSON catalog: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),
}

impl PartialEq for NeoCometError {
    fn eq(&self, other: &Self) -> bool {
        use NeoCometError::*;
        match (self, other) {
            (SchemaError { missing: a }, SchemaError { missing: b }) => a == b,
            (InvalidOrbitGeometry(a), InvalidOrbitGeometry(b)) => a == b,
            (
                InvalidFilterRange { min: a, max: b },
                InvalidFilterRange { min: c, max: d },
            ) => a.to_bits() == c.to_bits() && b.to_bits() == d.to_bits(),
            (UnknownDesignation(a), UnknownDesignation(b)) => a == b,
            (FetchFailed { status: a }, FetchFailed { status: b }) => a == b,

            // Wrapped foreign errors are not comparable: same variant is enough
            (HttpError(_), HttpError(_)) => true,
            (JsonError(_), JsonError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (IoError(_), IoError(_)) => true,

            (InvalidSampleCount, InvalidSampleCount) => true,

            _ => false,
        }
    }
}
