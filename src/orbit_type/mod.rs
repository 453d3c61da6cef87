//! # Comet orbital element representations
//!
//! This module defines the two record types flowing through the derivation pipeline and the
//! family classification:
//!
//! - [`raw_element`](crate::orbit_type::raw_element) — Catalog elements `(q, e, i, ω, Ω, P, MOID, epoch, H)`
//!   as fetched, every numeric field optional.
//! - [`derived_element`](crate::orbit_type::derived_element) — Quantities computed from one raw record:
//!   semi-major axis, Tisserand parameter, discovery date, diameter estimate, orbital energy.
//! - [`family`](crate::orbit_type::family) — Encke-type / Jupiter-family / Halley-type classification.
//!
//! ## Typical workflow
//!
//! ```rust
//! use neocomet::orbit_type::{derived_element::DerivedOrbitalElements, raw_element::RawOrbitalElements};
//!
//! let raw = RawOrbitalElements {
//!     designation: "2P/Encke".into(),
//!     eccentricity: Some(0.8483),
//!     perihelion_distance: Some(0.3360),
//!     inclination: Some(11.78),
//!     ..Default::default()
//! };
//!
//! let derived = DerivedOrbitalElements::derive(&raw);
//! if let Some(family) = derived.family {
//!     println!("{} is {family}", raw.designation);
//! }
//! ```

/// Quantities derived from catalog elements.
pub mod derived_element;

/// Tisserand-based family classification.
pub mod family;

/// Catalog elements as fetched, with lenient numeric parsing.
pub mod raw_element;
