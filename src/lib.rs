pub mod analysis;
pub mod catalog;
pub mod constants;
pub mod env_state;
pub mod explorer;
pub mod neocomet_errors;
pub mod orbit_path;
pub mod orbit_type;
pub mod pipeline;
pub mod ref_system;
pub mod time;

pub use catalog::CometCatalog;
pub use orbit_type::{
    derived_element::DerivedOrbitalElements,
    family::{classify_family, CometFamily},
    raw_element::RawOrbitalElements,
};
pub use pipeline::{derive_all, EccentricityRange};
