//! Static data that ships with the importer rather than the spreadsheet

pub mod archetypes;
pub mod collections;
pub mod scoring_guide;

pub use archetypes::{ARCHETYPES, build_archetypes};
pub use collections::collections;
pub use scoring_guide::SCORING_GUIDE;
